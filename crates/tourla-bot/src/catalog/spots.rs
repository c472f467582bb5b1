#[derive(Debug, Clone, PartialEq)]
pub struct TouristSpot {
    pub name: &'static str,
    pub address: &'static str,
    pub hours: &'static str,
    pub description: &'static str,
}

macro_rules! spot {
    ($name:literal, $address:literal, $hours:literal, $description:literal) => {
        TouristSpot {
            name: $name,
            address: $address,
            hours: $hours,
            description: $description,
        }
    };
}

static TOURIST_SPOTS: &[(&str, &[TouristSpot])] = &[
    ("usaquen", &[spot!("Mercado de las Pulgas de Usaquén", "Carrera 6 No. 118-20", "Domingos por la mañana", "Mercado de artesanías y antigüedades")]),
    ("chapinero", &[spot!("Parque de la 93", "Calle 93", "Público", "Parque con restaurantes y bares")]),
    ("santa_fe", &[spot!("Cerro de Monserrate", "Carrera 2 Este No. 21-48", "6am-10pm aprox.", "Mirador y santuario")]),
    ("san_cristobal", &[spot!("Cerro de Guadalupe", "Av. Circunvalar No. 70-50", "Consultar", "Mirador y santuario")]),
    ("usme", &[spot!("Parque Ecológico Sumapaz", "Vereda Nazareth", "6am-4pm", "Parque natural")]),
    ("tunjuelito", &[spot!("Parque El Tunal", "Calle 48B Sur #22-81", "Abierto", "Gran parque con zonas verdes")]),
    ("bosa", &[spot!("Plaza Fundacional de Bosa", "Carrera 80 #63-50 Sur", "Abierto", "Centro histórico")]),
    ("kennedy", &[spot!("Parque Timiza", "Carrera 73 #42-20 Sur", "Abierto", "Gran parque con lago")]),
    ("fontibon", &[spot!("Plaza Fundacional de Fontibón", "Carrera 99 #18-20", "Abierto", "Centro histórico")]),
    ("engativa", &[spot!("Parque Central de Engativá", "Carrera 77 #64-50", "Abierto", "Parque recreativo principal")]),
    ("suba", &[spot!("Centro Comercial Santafé", "Calle 185 No. 45-03", "10am-8pm", "Gran centro comercial")]),
    ("barrios_unidos", &[spot!("Parque El Virrey", "Carrera 15 No. 92-42", "Público", "Parque para caminar")]),
    ("teusaquillo", &[spot!("Parque Metropolitano Simón Bolívar", "Entre calles 53 y 64", "6am-6pm", "Gran parque para recreación")]),
    ("los_martires", &[spot!("Cementerio Central", "Calle 22 No. 3-90", "Consultar", "Sitio histórico")]),
    ("antonio_narino", &[spot!("Parque El Renacimiento", "Calle 23 Sur #39-10", "Abierto", "Parque recreativo")]),
    ("puente_aranda", &[spot!("Maloka", "Carrera 68D #24A-51", "Mar-Dom", "Museo interactivo de ciencia")]),
    (
        "la_candelaria",
        &[
            spot!("Monserrate", "Calle 21 No. 1-45 Este", "6am-11pm", "Cerro y santuario"),
            spot!("Museo del Oro", "Carrera 6 #15-88", "Mar-Dom", "Museo de piezas precolombinas"),
        ],
    ),
    ("rafael_uribe_uribe", &[spot!("Parque Entre Nubes", "Carrera 1 Este #48 Sur", "6am-5pm", "Parque ecológico")]),
    ("ciudad_bolivar", &[spot!("Parque Illimaní", "Diagonal 62 Sur #20-20", "6am-6pm", "Parque recreativo")]),
    ("sumapaz", &[spot!("Páramo de Sumapaz", "Vereda Nazareth", "6am-4pm", "Páramo más grande del mundo")]),
    ("zona_rosa", &[spot!("Zona T", "Calle 82 con Carrera 12", "Todo el día", "Calles peatonales con tiendas, bares y restaurantes")]),
];

/// Tourist spots for a canonical locality key; empty when the table has none
pub fn tourist_spots_in(key: &str) -> &'static [TouristSpot] {
    TOURIST_SPOTS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, spots)| *spots)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::locality;

    #[test]
    fn test_every_table_key_is_a_known_locality() {
        for (key, spots) in TOURIST_SPOTS {
            assert!(locality(key).is_some(), "unknown key {key}");
            assert!(!spots.is_empty());
        }
    }

    #[test]
    fn test_candelaria_has_two_spots() {
        let spots = tourist_spots_in("la_candelaria");
        assert_eq!(spots.len(), 2);
        assert_eq!(spots[1].name, "Museo del Oro");
    }

    #[test]
    fn test_missing_key_is_empty() {
        assert!(tourist_spots_in("chia").is_empty());
        assert!(tourist_spots_in("nowhere").is_empty());
    }
}
