//! Field validation for the manuscript draft.
//!
//! Each field carries exactly one rule from [`RULES`]. Rules are evaluated
//! independently; there are no cross-field checks. Lengths are counted in
//! Unicode scalar values and values are not trimmed before counting. A browser
//! form counts UTF-16 code units instead, so astral characters such as emoji
//! count once here but twice there.

use beacon_types::{Category, FieldName, FieldRule, ManuscriptDraft, ValidationResult};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// One row of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleEntry {
    pub field: FieldName,
    pub rule: FieldRule,
    /// Inline message shown while the field is invalid.
    pub message: &'static str,
}

/// Rule table in declared field order.
pub const RULES: [RuleEntry; 8] = [
    RuleEntry {
        field: FieldName::Title,
        rule: FieldRule::MinLength(5),
        message: "Title must be at least 5 characters.",
    },
    RuleEntry {
        field: FieldName::Abstract,
        rule: FieldRule::MinLength(100),
        message: "Abstract must be at least 100 characters.",
    },
    RuleEntry {
        field: FieldName::Keywords,
        rule: FieldRule::MinLength(3),
        message: "Please provide at least a few keywords separated by commas.",
    },
    RuleEntry {
        field: FieldName::Category,
        rule: FieldRule::OneOfCategories,
        message: "Please select a category.",
    },
    RuleEntry {
        field: FieldName::AuthorFirstName,
        rule: FieldRule::MinLength(1),
        message: "First name is required.",
    },
    RuleEntry {
        field: FieldName::AuthorLastName,
        rule: FieldRule::MinLength(1),
        message: "Last name is required.",
    },
    RuleEntry {
        field: FieldName::AuthorEmail,
        rule: FieldRule::Email,
        message: "Please enter a valid email.",
    },
    RuleEntry {
        field: FieldName::AuthorAffiliation,
        rule: FieldRule::MinLength(1),
        message: "Affiliation is required.",
    },
];

// The regex crate has no look-around, so the leading-dot and double-dot
// checks live in `is_valid_email`.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email regex should compile")
});

/// Returns `true` for `local@domain.tld` style addresses.
pub fn is_valid_email(candidate: &str) -> bool {
    !candidate.starts_with('.') && !candidate.contains("..") && EMAIL_REGEX.is_match(candidate)
}

/// Pure rule evaluator over a [`ManuscriptDraft`].
#[derive(Debug, Clone)]
pub struct FieldValidator {
    categories: Vec<Category>,
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::new(Category::ALL.to_vec())
    }
}

impl FieldValidator {
    /// Builds a validator that accepts only the given category catalog.
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Returns the rule table entry for a field.
    pub fn rule_for(field: FieldName) -> &'static RuleEntry {
        &RULES[field_index(field)]
    }

    /// Evaluates the rule of a single field.
    pub fn validate_field(&self, draft: &ManuscriptDraft, field: FieldName) -> ValidationResult {
        let entry = Self::rule_for(field);
        if self.satisfies(draft, entry) {
            ValidationResult::ok()
        } else {
            ValidationResult::invalid(entry.message)
        }
    }

    /// Evaluates every field, keyed in declared order.
    pub fn validate_all(&self, draft: &ManuscriptDraft) -> IndexMap<FieldName, ValidationResult> {
        FieldName::ALL
            .into_iter()
            .map(|field| (field, self.validate_field(draft, field)))
            .collect()
    }

    /// Runs every rule in declared order and yields the selected category once all pass.
    ///
    /// The error names the first failing field and its rule.
    pub fn check(&self, draft: &ManuscriptDraft) -> Result<Category, (FieldName, FieldRule)> {
        let rules: &'static [RuleEntry] = &RULES;
        let (leading, trailing) = rules.split_at(field_index(FieldName::Category));
        self.require(draft, leading)?;
        let category = self
            .selected_category(draft)
            .ok_or((FieldName::Category, FieldRule::OneOfCategories))?;
        self.require(draft, &trailing[1..])?;
        Ok(category)
    }

    fn require(&self, draft: &ManuscriptDraft, entries: &[RuleEntry]) -> Result<(), (FieldName, FieldRule)> {
        match entries.iter().find(|entry| !self.satisfies(draft, entry)) {
            Some(entry) => Err((entry.field, entry.rule)),
            None => Ok(()),
        }
    }

    fn selected_category(&self, draft: &ManuscriptDraft) -> Option<Category> {
        draft.category.filter(|category| self.categories.contains(category))
    }

    fn satisfies(&self, draft: &ManuscriptDraft, entry: &RuleEntry) -> bool {
        match entry.rule {
            FieldRule::MinLength(min) => draft.value(entry.field).chars().count() >= min,
            FieldRule::Email => is_valid_email(draft.value(entry.field)),
            FieldRule::OneOfCategories => self.selected_category(draft).is_some(),
        }
    }
}

fn field_index(field: FieldName) -> usize {
    match field {
        FieldName::Title => 0,
        FieldName::Abstract => 1,
        FieldName::Keywords => 2,
        FieldName::Category => 3,
        FieldName::AuthorFirstName => 4,
        FieldName::AuthorLastName => 5,
        FieldName::AuthorEmail => 6,
        FieldName::AuthorAffiliation => 7,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with(field: FieldName, value: &str) -> ManuscriptDraft {
        let mut draft = ManuscriptDraft::new();
        draft.set(field, value);
        draft
    }

    #[test]
    fn rule_table_follows_declared_field_order() {
        let fields: Vec<FieldName> = RULES.iter().map(|entry| entry.field).collect();
        assert_eq!(fields, FieldName::ALL.to_vec());
        for field in FieldName::ALL {
            assert_eq!(FieldValidator::rule_for(field).field, field);
        }
    }

    #[test]
    fn minimum_lengths_are_inclusive() {
        let validator = FieldValidator::default();
        let cases = [(FieldName::Title, 5), (FieldName::Abstract, 100), (FieldName::Keywords, 3)];
        for (field, min) in cases {
            let short = "x".repeat(min - 1);
            let exact = "x".repeat(min);
            assert!(!validator.validate_field(&draft_with(field, &short), field).valid, "{field} below minimum");
            assert!(validator.validate_field(&draft_with(field, &exact), field).valid, "{field} at minimum");
        }
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let validator = FieldValidator::default();
        assert!(validator.validate_field(&draft_with(FieldName::Title, "ünïcø"), FieldName::Title).valid);
        assert!(!validator.validate_field(&draft_with(FieldName::Title, "ünïc"), FieldName::Title).valid);
    }

    #[test]
    fn required_author_fields_reject_empty_values() {
        let validator = FieldValidator::default();
        for field in [FieldName::AuthorFirstName, FieldName::AuthorLastName, FieldName::AuthorAffiliation] {
            let result = validator.validate_field(&ManuscriptDraft::new(), field);
            assert!(!result.valid);
            assert_eq!(result.message.as_deref(), Some(FieldValidator::rule_for(field).message));
            assert!(validator.validate_field(&draft_with(field, "A"), field).valid);
        }
    }

    #[test]
    fn invalid_result_carries_rule_message() {
        let validator = FieldValidator::default();
        let result = validator.validate_field(&draft_with(FieldName::Title, "Hi"), FieldName::Title);
        assert_eq!(result, ValidationResult::invalid("Title must be at least 5 characters."));
    }

    #[test]
    fn email_syntax() {
        for valid in ["a@b.com", "first.last+tag@uni.example.org", "o'neil@lab.io"] {
            assert!(is_valid_email(valid), "{valid} should be valid");
        }
        for invalid in ["", "a", "a@b", "a@b.c", "@b.com", ".a@b.com", "a..b@c.com", "a.@b.com", "a b@c.com", "a@-b.com"]
        {
            assert!(!is_valid_email(invalid), "{invalid} should be invalid");
        }
    }

    #[test]
    fn category_requires_a_configured_selection() {
        let validator = FieldValidator::new(vec![Category::Medicine]);
        assert!(!validator.validate_field(&ManuscriptDraft::new(), FieldName::Category).valid);
        assert!(validator.validate_field(&draft_with(FieldName::Category, "medicine"), FieldName::Category).valid);
        assert!(!validator.validate_field(&draft_with(FieldName::Category, "humanities"), FieldName::Category).valid);
    }

    #[test]
    fn check_reports_first_failure_in_declared_order() {
        let validator = FieldValidator::default();
        let mut draft = ManuscriptDraft::new();
        assert_eq!(validator.check(&draft), Err((FieldName::Title, FieldRule::MinLength(5))));

        draft.set(FieldName::Title, "Climate Models");
        draft.set(FieldName::Abstract, "a".repeat(100));
        draft.set(FieldName::Keywords, "ai, ml");
        assert_eq!(validator.check(&draft), Err((FieldName::Category, FieldRule::OneOfCategories)));

        draft.set(FieldName::Category, "medicine");
        assert_eq!(validator.check(&draft), Err((FieldName::AuthorFirstName, FieldRule::MinLength(1))));
    }

    #[test]
    fn check_yields_the_selected_category_when_every_rule_passes() {
        let mut draft = ManuscriptDraft::new();
        draft.set(FieldName::Title, "Climate Models");
        draft.set(FieldName::Abstract, "a".repeat(100));
        draft.set(FieldName::Keywords, "ai, ml");
        draft.set(FieldName::Category, "engineering");
        draft.set(FieldName::AuthorFirstName, "Ada");
        draft.set(FieldName::AuthorLastName, "Lovelace");
        draft.set(FieldName::AuthorEmail, "ada@lab.org");
        draft.set(FieldName::AuthorAffiliation, "Analytical Society");
        assert_eq!(FieldValidator::default().check(&draft), Ok(Category::Engineering));

        let narrow = FieldValidator::new(vec![Category::Medicine]);
        assert_eq!(narrow.check(&draft), Err((FieldName::Category, FieldRule::OneOfCategories)));
    }

    #[test]
    fn astral_characters_count_once() {
        let validator = FieldValidator::default();
        let title = draft_with(FieldName::Title, "😀😀😀");
        assert!(!validator.validate_field(&title, FieldName::Title).valid);
        let title = draft_with(FieldName::Title, "😀😀😀😀😀");
        assert!(validator.validate_field(&title, FieldName::Title).valid);
    }

    #[test]
    fn validate_all_covers_every_field_in_order() {
        let results = FieldValidator::default().validate_all(&ManuscriptDraft::new());
        let keys: Vec<FieldName> = results.keys().copied().collect();
        assert_eq!(keys, FieldName::ALL.to_vec());
        assert!(results.values().all(|result| !result.valid));
    }

    #[test]
    fn validation_does_not_mutate_the_draft() {
        let draft = draft_with(FieldName::Title, "Hi");
        let before = draft.clone();
        let _ = FieldValidator::default().validate_all(&draft);
        assert_eq!(draft, before);
    }
}
