use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::{FieldViolation, ItemId};

use crate::item::Item;

/// Maximum feedback message length, counted in characters (Unicode scalar
/// values), not bytes.
pub const MESSAGE_MAX_CHARS: usize = 500;

/// A transient feedback payload addressed to one item.
///
/// A submission exists only for the duration of one request: it is validated,
/// logged, and discarded. It is never stored and never mutates the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Submission {
    /// Validate every field rule and collect ALL violations.
    ///
    /// Runs before any lookup/business logic so a bad payload is rejected in
    /// one round trip with the complete list of offending fields.
    pub fn validate(&self) -> Result<(), Vec<FieldViolation>> {
        let mut violations = Vec::new();

        if self.name.is_empty() {
            violations.push(FieldViolation::new("name", "must not be empty"));
        }

        if !is_valid_email(&self.email) {
            violations.push(FieldViolation::new("email", "must be a valid email address"));
        }

        let message_chars = self.message.chars().count();
        if message_chars == 0 {
            violations.push(FieldViolation::new("message", "must not be empty"));
        } else if message_chars > MESSAGE_MAX_CHARS {
            violations.push(FieldViolation::new(
                "message",
                format!("must be at most {MESSAGE_MAX_CHARS} characters"),
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    /// Human-readable acknowledgment referencing the sender and the item.
    pub fn acknowledgment(&self, item: &Item) -> String {
        format!(
            "Thank you {}, your message for '{}' was received.",
            self.name, item.name
        )
    }
}

/// Conventional email grammar: local-part "@" domain, where the domain
/// contains at least one dot-separated label and no label is empty.
///
/// Deliberately an explicit function rather than a schema/derive mechanism,
/// so the rule is testable on its own and independent of the HTTP layer.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|label| !label.is_empty())
}

/// Observability record of an accepted submission.
///
/// This is the only trace a submission leaves: it is emitted to the log and
/// dropped. No durable storage, no delivery guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRecord {
    pub item_id: ItemId,
    pub item_name: String,
    pub sender: String,
    pub email: String,
    pub message_chars: usize,
    pub received_at: DateTime<Utc>,
}

impl SubmissionRecord {
    pub fn new(item: &Item, submission: &Submission) -> Self {
        Self {
            item_id: item.id,
            item_name: item.name.clone(),
            sender: submission.name.clone(),
            email: submission.email.clone(),
            message_chars: submission.message.chars().count(),
            received_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::ItemId;

    fn valid_submission() -> Submission {
        Submission {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            message: "Great keyboard!".to_string(),
        }
    }

    fn test_item() -> Item {
        Item::new(ItemId::new(2), "Mechanical Keyboard", "short", "full")
    }

    #[test]
    fn valid_submission_passes() {
        assert!(valid_submission().validate().is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut s = valid_submission();
        s.name = String::new();
        let violations = s.validate().unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "name");
    }

    #[test]
    fn whitespace_only_name_is_accepted() {
        // Length is measured on the raw value; "   " has length 3.
        let mut s = valid_submission();
        s.name = "   ".to_string();
        assert!(s.validate().is_ok());
    }

    #[test]
    fn email_without_at_is_rejected() {
        let mut s = valid_submission();
        s.email = "ana.example.com".to_string();
        let violations = s.validate().unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "email");
    }

    #[test]
    fn email_without_domain_dot_is_rejected() {
        let mut s = valid_submission();
        s.email = "ana@localhost".to_string();
        let violations = s.validate().unwrap_err();
        assert_eq!(violations[0].field, "email");
    }

    #[test]
    fn empty_message_is_rejected() {
        let mut s = valid_submission();
        s.message = String::new();
        let violations = s.validate().unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "message");
    }

    #[test]
    fn message_of_exactly_max_length_is_accepted() {
        let mut s = valid_submission();
        s.message = "x".repeat(MESSAGE_MAX_CHARS);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn message_one_over_max_length_is_rejected() {
        let mut s = valid_submission();
        s.message = "x".repeat(MESSAGE_MAX_CHARS + 1);
        let violations = s.validate().unwrap_err();
        assert_eq!(violations[0].field, "message");
    }

    #[test]
    fn message_length_is_counted_in_characters_not_bytes() {
        // 500 two-byte characters: 1000 bytes, 500 chars, still valid.
        let mut s = valid_submission();
        s.message = "é".repeat(MESSAGE_MAX_CHARS);
        assert!(s.validate().is_ok());

        s.message = "é".repeat(MESSAGE_MAX_CHARS + 1);
        assert!(s.validate().is_err());
    }

    #[test]
    fn all_violations_are_collected() {
        let s = Submission {
            name: String::new(),
            email: "not-an-email".to_string(),
            message: String::new(),
        };
        let violations = s.validate().unwrap_err();
        let fields: Vec<&str> = violations.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["name", "email", "message"]);
    }

    #[test]
    fn acknowledgment_references_sender_and_item() {
        let ack = valid_submission().acknowledgment(&test_item());
        assert_eq!(
            ack,
            "Thank you Ana, your message for 'Mechanical Keyboard' was received."
        );
    }

    #[test]
    fn record_captures_item_and_sender() {
        let item = test_item();
        let submission = valid_submission();
        let record = SubmissionRecord::new(&item, &submission);
        assert_eq!(record.item_id, ItemId::new(2));
        assert_eq!(record.item_name, "Mechanical Keyboard");
        assert_eq!(record.sender, "Ana");
        assert_eq!(record.message_chars, 15);
    }

    mod email_grammar {
        use super::*;

        #[test]
        fn accepts_conventional_addresses() {
            for email in [
                "ana@example.com",
                "a@b.c",
                "first.last@sub.example.org",
                "user+tag@example.co.uk",
            ] {
                assert!(is_valid_email(email), "{email} should be valid");
            }
        }

        #[test]
        fn rejects_malformed_addresses() {
            for email in [
                "",
                "@example.com",
                "ana@",
                "ana@example",
                "ana@.com",
                "ana@example.",
                "ana@exa..mple.com",
                "ana@@example.com",
                "an a@example.com",
                "ana@exam ple.com",
            ] {
                assert!(!is_valid_email(email), "{email} should be invalid");
            }
        }
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: well-shaped addresses always pass the grammar check.
            #[test]
            fn shaped_emails_are_accepted(
                local in "[a-z0-9]{1,12}",
                domain in "[a-z0-9]{1,10}",
                tld in "[a-z]{2,6}"
            ) {
                let email = format!("{local}@{domain}.{tld}");
                prop_assert!(is_valid_email(&email));
            }

            /// Property: an address with no '@' never passes.
            #[test]
            fn atless_strings_are_rejected(s in "[a-z0-9.]{0,30}") {
                prop_assert!(!is_valid_email(&s));
            }

            /// Property: the message rule tracks character count exactly,
            /// regardless of byte length.
            #[test]
            fn message_rule_matches_char_count(message in "\\PC{0,600}") {
                let submission = Submission {
                    name: "Ana".to_string(),
                    email: "ana@example.com".to_string(),
                    message: message.clone(),
                };
                let chars = message.chars().count();
                let ok = (1..=MESSAGE_MAX_CHARS).contains(&chars);
                prop_assert_eq!(submission.validate().is_ok(), ok);
            }
        }
    }
}
