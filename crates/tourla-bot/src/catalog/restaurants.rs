#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub name: &'static str,
    /// Canonical locality key
    pub zone: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
}

static RESTAURANTS: &[Restaurant] = &[
    Restaurant { name: "Abasto", zone: "usaquen", kind: "Cocina colombiana", description: "Cocina de mercado con productos de la sabana" },
    Restaurant { name: "80 Sillas", zone: "usaquen", kind: "Peruana", description: "Cebichería en una casa tradicional del barrio" },
    Restaurant { name: "Harry Sasson", zone: "chapinero", kind: "Internacional", description: "Alta cocina en una casona de la Zona G" },
    Restaurant { name: "El Chato", zone: "chapinero", kind: "Colombiana contemporánea", description: "Menú de temporada con ingredientes locales" },
    Restaurant { name: "Salvo Patria", zone: "chapinero", kind: "Bistró", description: "Platos de producto local y café de origen" },
    Restaurant { name: "Casa San Isidro", zone: "santa_fe", kind: "Francesa", description: "Restaurante en la cima de Monserrate con vista a la ciudad" },
    Restaurant { name: "Casa Santa Clara", zone: "santa_fe", kind: "Colombiana", description: "Ajiaco y platos típicos junto al santuario de Monserrate" },
    Restaurant { name: "La Puerta Falsa", zone: "la_candelaria", kind: "Tradicional", description: "Tamales y chocolate santafereño desde 1816" },
    Restaurant { name: "Quinua y Amaranto", zone: "la_candelaria", kind: "Vegetariana", description: "Cocina casera vegetariana en el centro histórico" },
    Restaurant { name: "Prudencia", zone: "la_candelaria", kind: "Cocina de leña", description: "Menú de mercado cocinado al fuego" },
    Restaurant { name: "Andrés D.C.", zone: "zona_rosa", kind: "Parrilla colombiana", description: "Versión urbana de Andrés Carne de Res" },
    Restaurant { name: "Central Cevichería", zone: "zona_rosa", kind: "Mariscos", description: "Ceviches y cocina de mar" },
    Restaurant { name: "Osaki", zone: "zona_rosa", kind: "Nikkei", description: "Fusión japonesa y peruana" },
    Restaurant { name: "Andrés Carne de Res", zone: "chia", kind: "Parrilla colombiana", description: "Restaurante y fiesta, ícono de la sabana" },
];

/// Restaurants whose zone is the given canonical locality key
pub fn restaurants_in(key: &str) -> Vec<&'static Restaurant> {
    RESTAURANTS.iter().filter(|r| r.zone == key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::locality;

    #[test]
    fn test_zones_are_known_localities() {
        for r in RESTAURANTS {
            assert!(locality(r.zone).is_some(), "{} has unknown zone {}", r.name, r.zone);
        }
    }

    #[test]
    fn test_restaurants_in_filters_by_zone() {
        let chapinero = restaurants_in("chapinero");
        assert_eq!(chapinero.len(), 3);
        assert!(chapinero.iter().all(|r| r.zone == "chapinero"));
        assert_eq!(restaurants_in("chia")[0].name, "Andrés Carne de Res");
        assert!(restaurants_in("sumapaz").is_empty());
    }
}
