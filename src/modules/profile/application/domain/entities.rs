use chrono::NaiveDate;
use serde::Serialize;

use crate::auth::application::domain::entities::UserId;

/// A user's public profile. Optional text fields are stored as empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub user_id: UserId,
    pub date_of_birth: NaiveDate,
    /// Sanitized HTML.
    pub bio: String,
    pub given_name: String,
    pub family_name: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub favourite_animal: String,
    pub hobby: String,
    pub favourite_fountain_pen: String,
}

impl UserProfile {
    /// `"Given FAMILY (email)"`, dropping whichever name parts are empty.
    /// With no names at all this is just the email.
    pub fn display_name(&self, email: &str) -> String {
        let mut names = Vec::with_capacity(2);
        if !self.given_name.is_empty() {
            names.push(self.given_name.clone());
        }
        if !self.family_name.is_empty() {
            names.push(self.family_name.to_uppercase());
        }

        if names.is_empty() {
            email.to_string()
        } else {
            format!("{} ({})", names.join(" "), email)
        }
    }
}

/// Stored avatar keys for one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AvatarRecord {
    pub image_key: Option<String>,
    pub pending_key: Option<String>,
}
