//! Static reference tables compiled into the binary.
//!
//! Every locality has a canonical key (`chapinero`, `la_candelaria`, ...) and
//! a list of normalized aliases. The other tables are keyed by that canonical
//! key and may have no entry for a given locality.

mod restaurants;
mod safety;
mod spots;

pub use restaurants::{restaurants_in, Restaurant};
pub use safety::safety_notes_for;
pub use spots::{tourist_spots_in, TouristSpot};

use crate::normalize::{contains_word, normalize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Plaza de Bolívar, used when a locality has no coordinates of its own
pub const BOGOTA_CENTER: Coordinates = Coordinates { lat: 4.6097, lng: -74.0721 };

#[derive(Debug, PartialEq)]
pub struct Locality {
    pub key: &'static str,
    /// Display name, with diacritics
    pub name: &'static str,
    /// Normalized spellings users type
    pub aliases: &'static [&'static str],
    pub coordinates: Coordinates,
    /// City query for weather lookups
    pub city: &'static str,
}

macro_rules! locality {
    ($key:literal, $name:literal, [$($alias:literal),+], $lat:literal, $lng:literal) => {
        locality!($key, $name, [$($alias),+], $lat, $lng, "Bogota,CO")
    };
    ($key:literal, $name:literal, [$($alias:literal),+], $lat:literal, $lng:literal, $city:literal) => {
        Locality {
            key: $key,
            name: $name,
            aliases: &[$($alias),+],
            coordinates: Coordinates { lat: $lat, lng: $lng },
            city: $city,
        }
    };
}

/// Scan order is table order: the first alias found in the text wins.
pub static LOCALITIES: &[Locality] = &[
    locality!("usaquen", "Usaquén", ["usaquen"], 4.6945, -74.0305),
    locality!("chapinero", "Chapinero", ["chapinero", "zona g"], 4.6486, -74.0628),
    locality!("santa_fe", "Santa Fe", ["santa fe"], 4.6130, -74.0690),
    locality!("san_cristobal", "San Cristóbal", ["san cristobal"], 4.5725, -74.0830),
    locality!("usme", "Usme", ["usme"], 4.4790, -74.1260),
    locality!("tunjuelito", "Tunjuelito", ["tunjuelito"], 4.5760, -74.1390),
    locality!("bosa", "Bosa", ["bosa"], 4.6100, -74.1900),
    locality!("kennedy", "Kennedy", ["kennedy"], 4.6280, -74.1460),
    locality!("fontibon", "Fontibón", ["fontibon"], 4.6813, -74.1413),
    locality!("engativa", "Engativá", ["engativa"], 4.7070, -74.1100),
    locality!("suba", "Suba", ["suba"], 4.7410, -74.0840),
    locality!("barrios_unidos", "Barrios Unidos", ["barrios unidos"], 4.6660, -74.0740),
    locality!("teusaquillo", "Teusaquillo", ["teusaquillo"], 4.6390, -74.0800),
    locality!("los_martires", "Los Mártires", ["los martires", "martires"], 4.6040, -74.0900),
    locality!("antonio_narino", "Antonio Nariño", ["antonio narino"], 4.5890, -74.1000),
    locality!("puente_aranda", "Puente Aranda", ["puente aranda"], 4.6150, -74.1150),
    locality!("la_candelaria", "La Candelaria", ["la candelaria", "candelaria"], 4.5970, -74.0720),
    locality!("rafael_uribe_uribe", "Rafael Uribe Uribe", ["rafael uribe uribe", "rafael uribe"], 4.5710, -74.1160),
    locality!("ciudad_bolivar", "Ciudad Bolívar", ["ciudad bolivar"], 4.5070, -74.1530),
    locality!("sumapaz", "Sumapaz", ["sumapaz"], 4.0900, -74.2500),
    locality!("zona_rosa", "Zona Rosa", ["zona rosa", "zona t"], 4.6668, -74.0526),
    locality!("chia", "Chía", ["chia"], 4.8610, -74.0320, "Chia,CO"),
];

/// Weather query used when no locality was named
pub const DEFAULT_CITY: &str = "Bogota,CO";

/// Look up a locality by canonical key
pub fn locality(key: &str) -> Option<&'static Locality> {
    LOCALITIES.iter().find(|l| l.key == key)
}

/// Resolve a single user-typed name ("CHÍA", "la Candelaria") to its locality
pub fn resolve_alias(name: &str) -> Option<&'static Locality> {
    let normalized = normalize(name);
    let normalized = normalized.trim();
    LOCALITIES
        .iter()
        .find(|l| l.aliases.iter().any(|alias| *alias == normalized))
}

/// First locality whose alias appears as whole words in already-normalized text
pub fn find_in(normalized_text: &str) -> Option<&'static Locality> {
    LOCALITIES.iter().find(|l| {
        l.aliases
            .iter()
            .any(|alias| contains_word(normalized_text, alias))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique() {
        for (i, a) in LOCALITIES.iter().enumerate() {
            for b in &LOCALITIES[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }

    #[test]
    fn test_aliases_are_already_normalized() {
        for l in LOCALITIES {
            for alias in l.aliases {
                assert_eq!(normalize(alias), *alias, "alias {alias} of {}", l.key);
            }
        }
    }

    #[test]
    fn test_every_alias_resolves_to_its_key_in_any_case() {
        for l in LOCALITIES {
            for alias in l.aliases {
                assert_eq!(resolve_alias(alias).map(|r| r.key), Some(l.key));
                assert_eq!(resolve_alias(&alias.to_uppercase()).map(|r| r.key), Some(l.key));
            }
            // The display name carries the diacritics.
            assert_eq!(resolve_alias(l.name).map(|r| r.key), Some(l.key), "name {}", l.name);
        }
    }

    #[test]
    fn test_diacritics_do_not_matter() {
        assert_eq!(resolve_alias("CHÍA").map(|l| l.key), Some("chia"));
        assert_eq!(resolve_alias("chia").map(|l| l.key), Some("chia"));
        assert_eq!(resolve_alias("Antonio Nariño").map(|l| l.key), Some("antonio_narino"));
        assert_eq!(resolve_alias("Medellín"), None);
    }

    #[test]
    fn test_find_in_respects_word_boundaries() {
        assert_eq!(find_in("bares en la zona t").map(|l| l.key), Some("zona_rosa"));
        assert_eq!(find_in("quiero una zona turistica"), None);
        assert_eq!(find_in("turismo en chapinero.").map(|l| l.key), Some("chapinero"));
    }

    #[test]
    fn test_first_locality_in_table_order_wins() {
        assert_eq!(find_in("de chapinero a usaquen").map(|l| l.key), Some("usaquen"));
    }
}
