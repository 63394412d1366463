use async_trait::async_trait;
use chrono::NaiveDate;
use std::fmt;

use crate::auth::application::domain::entities::UserId;

use super::fetch_profile::ProfileView;

pub const MIN_BIO_CHARS: usize = 10;
pub const MAX_TEXT_FIELD_CHARS: usize = 255;

/// Raw profile form input.
#[derive(Debug, Clone, Default)]
pub struct ProfileFields {
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub favourite_animal: Option<String>,
    pub hobby: Option<String>,
    pub favourite_fountain_pen: Option<String>,
}

/// Validated profile update. Text fields are trimmed, missing ones are empty.
/// The bio is still unsanitized.
#[derive(Debug, Clone)]
pub struct UpdateProfileRequest {
    date_of_birth: NaiveDate,
    bio: String,
    given_name: String,
    family_name: String,
    city: String,
    state: String,
    country: String,
    favourite_animal: String,
    hobby: String,
    favourite_fountain_pen: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateProfileRequestError {
    DateOfBirthInFuture,
    BioTooShort,
    FieldTooLong(&'static str),
}

impl UpdateProfileRequestError {
    /// Form field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            UpdateProfileRequestError::DateOfBirthInFuture => "date_of_birth",
            UpdateProfileRequestError::BioTooShort => "bio",
            UpdateProfileRequestError::FieldTooLong(field) => field,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            UpdateProfileRequestError::DateOfBirthInFuture => "date_in_future",
            UpdateProfileRequestError::BioTooShort => "too_short",
            UpdateProfileRequestError::FieldTooLong(_) => "too_long",
        }
    }
}

impl fmt::Display for UpdateProfileRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateProfileRequestError::DateOfBirthInFuture => {
                write!(f, "Date of birth cannot be in the future")
            }
            UpdateProfileRequestError::BioTooShort => {
                write!(f, "Bio must be at least {} characters", MIN_BIO_CHARS)
            }
            UpdateProfileRequestError::FieldTooLong(field) => write!(
                f,
                "{} must be at most {} characters",
                field, MAX_TEXT_FIELD_CHARS
            ),
        }
    }
}

impl std::error::Error for UpdateProfileRequestError {}

fn text_field(
    name: &'static str,
    value: Option<String>,
) -> Result<String, UpdateProfileRequestError> {
    let value = value.map(|v| v.trim().to_string()).unwrap_or_default();
    if value.chars().count() > MAX_TEXT_FIELD_CHARS {
        return Err(UpdateProfileRequestError::FieldTooLong(name));
    }
    Ok(value)
}

impl UpdateProfileRequest {
    /// `today` is passed in so the future-date check stays deterministic.
    pub fn new(
        date_of_birth: NaiveDate,
        bio: String,
        fields: ProfileFields,
        today: NaiveDate,
    ) -> Result<Self, UpdateProfileRequestError> {
        if date_of_birth > today {
            return Err(UpdateProfileRequestError::DateOfBirthInFuture);
        }
        if bio.chars().count() < MIN_BIO_CHARS {
            return Err(UpdateProfileRequestError::BioTooShort);
        }

        Ok(Self {
            date_of_birth,
            bio,
            given_name: text_field("given_name", fields.given_name)?,
            family_name: text_field("family_name", fields.family_name)?,
            city: text_field("city", fields.city)?,
            state: text_field("state", fields.state)?,
            country: text_field("country", fields.country)?,
            favourite_animal: text_field("favourite_animal", fields.favourite_animal)?,
            hobby: text_field("hobby", fields.hobby)?,
            favourite_fountain_pen: text_field(
                "favourite_fountain_pen",
                fields.favourite_fountain_pen,
            )?,
        })
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn favourite_animal(&self) -> &str {
        &self.favourite_animal
    }

    pub fn hobby(&self) -> &str {
        &self.hobby
    }

    pub fn favourite_fountain_pen(&self) -> &str {
        &self.favourite_fountain_pen
    }
}

#[derive(Debug, Clone)]
pub enum UpdateProfileError {
    UserNotFound,
    RepositoryError(String),
}

impl fmt::Display for UpdateProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateProfileError::UserNotFound => write!(f, "User not found"),
            UpdateProfileError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for UpdateProfileError {}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        request: UpdateProfileRequest,
    ) -> Result<ProfileView, UpdateProfileError>;
}
