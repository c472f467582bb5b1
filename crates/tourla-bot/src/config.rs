//! API-key handling for the optional augmentation services.

/// Values shipped in sample `.env` files; treated the same as an absent key.
pub const PLACEHOLDER_KEYS: &[&str] = &[
    "your_google_maps_api_key",
    "your_openai_api_key_here",
    "your_openweather_api_key",
];

/// Keep a key only if it is present, non-blank and not a known placeholder.
pub fn configured_key(raw: Option<String>) -> Option<String> {
    raw.map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty() && !PLACEHOLDER_KEYS.contains(&k.as_str()))
}

/// Read a key from the environment with [`configured_key`] applied
pub fn key_from_env(var: &str) -> Option<String> {
    configured_key(std::env::var(var).ok())
}
