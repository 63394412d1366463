use crate::auth::application::domain::{
    entities::IdentityAttributes,
    password_validation::{FailureCode, PasswordField, PolicyFailure},
};

/// Characters accepted by the special-character rule. Plain membership, no
/// regex class semantics.
pub const SPECIAL_CHARACTERS: &str = "~`!@#$%^&*()-_+=[]{}|\\:;'\",<.>?/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Digit,
    Lowercase,
    Uppercase,
    Special,
}

impl CharClass {
    pub fn matches(self, c: char) -> bool {
        match self {
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Special => SPECIAL_CHARACTERS.contains(c),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// Minimum number of characters (Unicode scalar values).
    MinLength(usize),
    MaxLength(usize),
    /// At least one character of the class.
    Contains(CharClass),
    /// No non-empty identity attribute as a case-insensitive substring.
    ExcludesIdentity,
}

/// One independent, stateless check on a new password.
#[derive(Debug, Clone)]
pub struct ValidationRule {
    pub code: FailureCode,
    pub message: String,
    pub requirement: Requirement,
}

impl ValidationRule {
    pub fn new(code: FailureCode, message: impl Into<String>, requirement: Requirement) -> Self {
        Self {
            code,
            message: message.into(),
            requirement,
        }
    }

    pub fn is_satisfied_by(&self, candidate: &str, identity: IdentityAttributes<'_>) -> bool {
        match &self.requirement {
            Requirement::MinLength(min) => candidate.chars().count() >= *min,
            Requirement::MaxLength(max) => candidate.chars().count() <= *max,
            Requirement::Contains(class) => candidate.chars().any(|c| class.matches(c)),
            Requirement::ExcludesIdentity => !contains_identity_component(candidate, identity),
        }
    }

    pub fn to_failure(&self) -> PolicyFailure {
        PolicyFailure::new(self.code, PasswordField::NewPassword1, self.message.clone())
    }
}

fn contains_identity_component(candidate: &str, identity: IdentityAttributes<'_>) -> bool {
    let lowered = candidate.to_lowercase();

    identity
        .components()
        .iter()
        .filter(|attribute| !attribute.is_empty())
        .any(|attribute| lowered.contains(&attribute.to_lowercase()))
}
