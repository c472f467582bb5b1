use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// User profile record, keyed by the auth provider's user id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: None,
            full_name: None,
            avatar_url: None,
            updated_at: Utc::now(),
        }
    }

    /// Name shown in the chat header: full name, else the email's local part
    pub fn display_name(&self) -> Option<&str> {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or_else(|| self.email.as_deref().and_then(|e| e.split('@').next()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut profile = UserProfile::new("u1");
        assert_eq!(profile.display_name(), None);

        profile.email = Some("ana@example.com".to_string());
        assert_eq!(profile.display_name(), Some("ana"));

        profile.full_name = Some("Ana Gómez".to_string());
        assert_eq!(profile.display_name(), Some("Ana Gómez"));
    }
}
