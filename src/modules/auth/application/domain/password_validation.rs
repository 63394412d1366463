use serde::Serialize;
use std::fmt;

/// Machine-readable reason a password was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCode {
    PasswordIncorrect,
    PasswordMismatch,
    PasswordSameAsOld,
    TooShort,
    TooLong,
    NoNumber,
    NoLowercase,
    NoUppercase,
    NoSpecial,
    OtherIdentityComponent,
}

impl FailureCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureCode::PasswordIncorrect => "password_incorrect",
            FailureCode::PasswordMismatch => "password_mismatch",
            FailureCode::PasswordSameAsOld => "password_same_as_old",
            FailureCode::TooShort => "too_short",
            FailureCode::TooLong => "too_long",
            FailureCode::NoNumber => "no_number",
            FailureCode::NoLowercase => "no_lowercase",
            FailureCode::NoUppercase => "no_uppercase",
            FailureCode::NoSpecial => "no_special",
            FailureCode::OtherIdentityComponent => "other_identity_component",
        }
    }
}

impl fmt::Display for FailureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form input a failure is reported against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordField {
    OldPassword,
    NewPassword1,
    NewPassword2,
}

impl PasswordField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordField::OldPassword => "old_password",
            PasswordField::NewPassword1 => "new_password1",
            PasswordField::NewPassword2 => "new_password2",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyFailure {
    pub code: FailureCode,
    pub field: PasswordField,
    pub message: String,
}

impl PolicyFailure {
    pub fn new(code: FailureCode, field: PasswordField, message: impl Into<String>) -> Self {
        Self {
            code,
            field,
            message: message.into(),
        }
    }
}

/// Every failure of one evaluation, in the order the checks ran.
/// An empty list means the candidate is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    failures: Vec<PolicyFailure>,
}

impl ValidationOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, failure: PolicyFailure) {
        self.failures.push(failure);
    }

    pub fn extend(&mut self, failures: impl IntoIterator<Item = PolicyFailure>) {
        self.failures.extend(failures);
    }

    pub fn is_pass(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[PolicyFailure] {
        &self.failures
    }

    pub fn codes(&self) -> Vec<FailureCode> {
        self.failures.iter().map(|f| f.code).collect()
    }

    pub fn has(&self, code: FailureCode) -> bool {
        self.failures.iter().any(|f| f.code == code)
    }

    pub fn into_failures(self) -> Vec<PolicyFailure> {
        self.failures
    }
}
