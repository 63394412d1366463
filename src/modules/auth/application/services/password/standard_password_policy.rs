use crate::auth::application::{
    domain::{
        entities::IdentityAttributes,
        password_validation::{FailureCode, PolicyFailure},
    },
    ports::incoming::PasswordPolicy,
};

use super::{
    policy_config::PasswordPolicyConfig,
    rules::{CharClass, Requirement, ValidationRule, SPECIAL_CHARACTERS},
};

/// The account password rules: one character of each class and nothing
/// lifted from the account's own identity, plus any configured length bounds.
#[derive(Debug, Clone)]
pub struct StandardPasswordPolicy {
    rules: Vec<ValidationRule>,
}

impl StandardPasswordPolicy {
    pub fn new(config: &PasswordPolicyConfig) -> Self {
        let mut rules = Vec::new();

        if let Some(min) = config.min_length {
            rules.push(ValidationRule::new(
                FailureCode::TooShort,
                format!(
                    "This password is too short. It must contain at least {} characters.",
                    min
                ),
                Requirement::MinLength(min),
            ));
        }
        if let Some(max) = config.max_length {
            rules.push(ValidationRule::new(
                FailureCode::TooLong,
                format!(
                    "This password is too long. It must contain at most {} characters.",
                    max
                ),
                Requirement::MaxLength(max),
            ));
        }

        rules.extend([
            ValidationRule::new(
                FailureCode::NoNumber,
                "The password must contain at least 1 digit, 0-9.",
                Requirement::Contains(CharClass::Digit),
            ),
            ValidationRule::new(
                FailureCode::NoLowercase,
                "The password must contain at least 1 lowercase letter, a-z.",
                Requirement::Contains(CharClass::Lowercase),
            ),
            ValidationRule::new(
                FailureCode::NoUppercase,
                "The password must contain at least 1 uppercase letter, A-Z.",
                Requirement::Contains(CharClass::Uppercase),
            ),
            ValidationRule::new(
                FailureCode::NoSpecial,
                format!(
                    "The password must contain at least 1 special character: {}",
                    SPECIAL_CHARACTERS
                ),
                Requirement::Contains(CharClass::Special),
            ),
            ValidationRule::new(
                FailureCode::OtherIdentityComponent,
                "The password must not contain your email address, given name or family name.",
                Requirement::ExcludesIdentity,
            ),
        ]);

        Self { rules }
    }

    pub fn rules(&self) -> &[ValidationRule] {
        &self.rules
    }
}

impl Default for StandardPasswordPolicy {
    fn default() -> Self {
        Self::new(&PasswordPolicyConfig::default())
    }
}

impl PasswordPolicy for StandardPasswordPolicy {
    fn evaluate(&self, candidate: &str, identity: IdentityAttributes<'_>) -> Vec<PolicyFailure> {
        self.rules
            .iter()
            .filter(|rule| !rule.is_satisfied_by(candidate, identity))
            .map(ValidationRule::to_failure)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> IdentityAttributes<'static> {
        IdentityAttributes {
            email: "alicesmith@test.com",
            given_name: "alice",
            family_name: "smith",
        }
    }

    fn codes(failures: &[PolicyFailure]) -> Vec<FailureCode> {
        failures.iter().map(|f| f.code).collect()
    }

    #[test]
    fn test_valid_password_passes() {
        let policy = StandardPasswordPolicy::default();
        assert!(policy.evaluate("NewValidPass7890!@#", identity()).is_empty());
    }

    #[test]
    fn test_each_missing_class_is_reported_alone() {
        let policy = StandardPasswordPolicy::default();
        let cases = [
            ("UPPERlower,./$%^", FailureCode::NoNumber),
            ("UPPER123456,./$%^", FailureCode::NoLowercase),
            ("lower123456,./$%^", FailureCode::NoUppercase),
            ("UPPERlower123456", FailureCode::NoSpecial),
        ];

        for (candidate, expected) in cases {
            assert_eq!(
                codes(&policy.evaluate(candidate, identity())),
                vec![expected],
                "candidate {candidate:?}"
            );
        }
    }

    #[test]
    fn test_all_failures_reported_in_rule_order() {
        let policy = StandardPasswordPolicy::default();
        let failures = policy.evaluate("alice", identity());

        assert_eq!(
            codes(&failures),
            vec![
                FailureCode::NoNumber,
                FailureCode::NoUppercase,
                FailureCode::NoSpecial,
                FailureCode::OtherIdentityComponent,
            ]
        );
    }

    #[test]
    fn test_identity_reported_once_when_several_attributes_match() {
        let policy = StandardPasswordPolicy::default();
        let failures = policy.evaluate("AliceSmith123,./", identity());

        assert_eq!(codes(&failures), vec![FailureCode::OtherIdentityComponent]);
    }

    #[test]
    fn test_default_policy_has_no_length_rules() {
        let policy = StandardPasswordPolicy::default();

        assert!(policy
            .rules()
            .iter()
            .all(|rule| !matches!(rule.code, FailureCode::TooShort | FailureCode::TooLong)));
        assert!(policy.evaluate("Ab1!", identity()).is_empty());
    }

    #[test]
    fn test_adding_a_digit_only_clears_no_number() {
        let policy = StandardPasswordPolicy::default();
        let long = format!("Ab!{}", "x".repeat(125));
        let short = "Ab!cdef".to_string();

        for candidate in [long, short] {
            let before = codes(&policy.evaluate(&candidate, identity()));
            assert_eq!(before, vec![FailureCode::NoNumber], "candidate {candidate:?}");

            for at in [0, candidate.len() / 2, candidate.len()] {
                let mut with_digit = candidate.clone();
                with_digit.insert(at, '1');
                assert!(
                    policy.evaluate(&with_digit, identity()).is_empty(),
                    "digit at {at} in {candidate:?}"
                );
            }
        }
    }

    #[test]
    fn test_length_bounds_follow_config() {
        let policy =
            StandardPasswordPolicy::new(&PasswordPolicyConfig::new(Some(4), Some(12)));

        assert!(policy.evaluate("Ab1!", identity()).is_empty());
        assert_eq!(
            codes(&policy.evaluate("Ab1!Ab1!Ab1!x", identity())),
            vec![FailureCode::TooLong]
        );
        assert_eq!(
            codes(&policy.evaluate("A1!", identity())),
            vec![FailureCode::TooShort, FailureCode::NoLowercase]
        );
    }

    #[test]
    fn test_too_short_message_names_minimum() {
        let policy = StandardPasswordPolicy::new(&PasswordPolicyConfig::new(Some(8), None));
        let failures = policy.evaluate("Ab1!", identity());

        assert_eq!(failures[0].code, FailureCode::TooShort);
        assert!(failures[0].message.contains("at least 8 characters"));
    }
}
