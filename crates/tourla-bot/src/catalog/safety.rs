static SAFETY_NOTES: &[(&str, &[&str])] = &[
    (
        "la_candelaria",
        &[
            "Recorre el centro histórico de día y en grupo.",
            "Guarda el celular en lugares concurridos como la Plaza de Bolívar.",
            "Después de las 8pm prefiere taxis pedidos por aplicación.",
        ],
    ),
    (
        "santa_fe",
        &[
            "Sube a Monserrate en teleférico o funicular; el sendero solo en horario habilitado.",
            "Evita las calles solitarias alrededor de la Avenida Jiménez en la noche.",
        ],
    ),
    (
        "chapinero",
        &[
            "La Zona G y el Parque de la 93 son tranquilos, pero cuida tus pertenencias en los bares.",
            "Usa taxis de aplicación al salir de noche.",
        ],
    ),
    (
        "zona_rosa",
        &[
            "No dejes bebidas sin supervisión en bares y discotecas.",
            "Ten cuidado con el hurto de celulares en las zonas peatonales.",
        ],
    ),
    (
        "usaquen",
        &["Los domingos el mercado se llena: vigila bolsos y billeteras."],
    ),
    (
        "los_martires",
        &[
            "Visita el Cementerio Central en horario de atención y acompañado.",
            "Evita caminar por la zona después del anochecer.",
        ],
    ),
    (
        "ciudad_bolivar",
        &["Recorre la zona con un guía local, por ejemplo en el TransMiCable."],
    ),
];

/// Safety notes for a canonical locality key; empty when the table has none
pub fn safety_notes_for(key: &str) -> &'static [&'static str] {
    SAFETY_NOTES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, notes)| *notes)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safety_notes_lookup() {
        assert_eq!(safety_notes_for("la_candelaria").len(), 3);
        assert!(safety_notes_for("sumapaz").is_empty());
    }
}
