use email_address::EmailAddress;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The caller of an authenticated request and the credential version its
/// access token was issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionUser {
    pub id: UserId,
    pub credential_version: i64,
}

impl SessionUser {
    pub fn new(id: UserId, credential_version: i64) -> Self {
        Self {
            id,
            credential_version,
        }
    }

    /// A token minted before the last credential change no longer counts.
    pub fn is_stale(&self, stored_version: i64) -> bool {
        self.credential_version < stored_version
    }
}

/// Lowercase and trim an email so it can act as the case-insensitive login key.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailError {
    Empty,
    InvalidFormat,
}

impl fmt::Display for EmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmailError::Empty => write!(f, "Email cannot be empty"),
            EmailError::InvalidFormat => write!(f, "Invalid email format"),
        }
    }
}

/// Validates and normalizes a user-supplied email.
pub fn parse_email(raw: &str) -> Result<String, EmailError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(EmailError::Empty);
    }
    if !EmailAddress::is_valid(trimmed) {
        return Err(EmailError::InvalidFormat);
    }

    Ok(normalize_email(trimmed))
}

/// The acting account together with the profile names the password rules
/// compare against.
#[derive(Clone)]
pub struct Identity {
    pub id: UserId,
    pub email: String,
    pub given_name: String,
    pub family_name: String,
    pub password_hash: String,
    /// Bumped on every credential write; `update_password` only succeeds
    /// against the version that was read.
    pub credential_version: i64,
    pub is_active: bool,
}

impl Identity {
    pub fn attributes(&self) -> IdentityAttributes<'_> {
        IdentityAttributes {
            email: &self.email,
            given_name: &self.given_name,
            family_name: &self.family_name,
        }
    }
}

// The hash never shows up in logs.
impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("given_name", &self.given_name)
            .field("family_name", &self.family_name)
            .field("password_hash", &"<redacted>")
            .field("credential_version", &self.credential_version)
            .field("is_active", &self.is_active)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityAttributes<'a> {
    pub email: &'a str,
    pub given_name: &'a str,
    pub family_name: &'a str,
}

impl<'a> IdentityAttributes<'a> {
    /// Attributes known before a profile exists (registration).
    pub fn email_only(email: &'a str) -> Self {
        Self {
            email,
            given_name: "",
            family_name: "",
        }
    }

    pub fn components(&self) -> [&'a str; 3] {
        [self.email, self.given_name, self.family_name]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_identity() -> Identity {
        Identity {
            id: UserId::from(Uuid::new_v4()),
            email: "alicesmith@test.com".to_string(),
            given_name: "alice".to_string(),
            family_name: "smith".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
            credential_version: 3,
            is_active: true,
        }
    }

    #[test]
    fn test_normalize_email_trims_and_lowercases() {
        assert_eq!(
            normalize_email("  AliceSmith@Test.COM "),
            "alicesmith@test.com"
        );
    }

    #[test]
    fn test_parse_email() {
        assert_eq!(
            parse_email(" Bob@Example.COM ").unwrap(),
            "bob@example.com"
        );
        assert_eq!(parse_email("   "), Err(EmailError::Empty));
        assert_eq!(parse_email("missing@"), Err(EmailError::InvalidFormat));
        assert_eq!(parse_email("notanemail"), Err(EmailError::InvalidFormat));
    }

    #[test]
    fn test_debug_redacts_password_hash() {
        let rendered = format!("{:?}", sample_identity());

        assert!(!rendered.contains("$argon2id"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("alicesmith@test.com"));
    }

    #[test]
    fn test_attributes_borrow_identity_fields() {
        let identity = sample_identity();
        let attrs = identity.attributes();

        assert_eq!(
            attrs.components(),
            ["alicesmith@test.com", "alice", "smith"]
        );
    }

    #[test]
    fn test_email_only_leaves_names_empty() {
        let attrs = IdentityAttributes::email_only("bob@test.com");

        assert_eq!(attrs.given_name, "");
        assert_eq!(attrs.family_name, "");
    }

    #[test]
    fn test_session_is_stale_only_behind_stored_version() {
        let session = SessionUser::new(UserId::from(Uuid::new_v4()), 2);

        assert!(!session.is_stale(2));
        assert!(session.is_stale(3));
    }
}
