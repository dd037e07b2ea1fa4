//! Built-in constraint kinds.
//!
//! Each kind is a static descriptor; checkers are registered against its
//! `name`. Custom kinds are declared the same way outside this crate.

use crate::ConstraintKind;

pub static NOT_NULL: ConstraintKind = ConstraintKind {
    name: "NotNull",
    options: &[],
    required: &[],
    default_option: None,
    messages: &[("message", "This value should not be null.")],
};

pub static NOT_BLANK: ConstraintKind = ConstraintKind {
    name: "NotBlank",
    options: &["allowNull"],
    required: &[],
    default_option: None,
    messages: &[("message", "This value should not be blank.")],
};

pub static LENGTH: ConstraintKind = ConstraintKind {
    name: "Length",
    options: &["min", "max"],
    required: &[],
    default_option: None,
    messages: &[
        (
            "minMessage",
            "This value is too short. It should have {{ limit }} characters or more.",
        ),
        (
            "maxMessage",
            "This value is too long. It should have {{ limit }} characters or less.",
        ),
        (
            "exactMessage",
            "This value should have exactly {{ limit }} characters.",
        ),
    ],
};

pub static RANGE: ConstraintKind = ConstraintKind {
    name: "Range",
    options: &["min", "max"],
    required: &[],
    default_option: None,
    messages: &[
        ("minMessage", "This value should be {{ limit }} or more."),
        ("maxMessage", "This value should be {{ limit }} or less."),
        ("invalidMessage", "This value should be a valid number."),
    ],
};

pub static REGEX: ConstraintKind = ConstraintKind {
    name: "Regex",
    options: &["pattern", "match"],
    required: &["pattern"],
    default_option: Some("pattern"),
    messages: &[("message", "This value is not valid.")],
};

pub static TYPE: ConstraintKind = ConstraintKind {
    name: "Type",
    options: &["type"],
    required: &["type"],
    default_option: Some("type"),
    messages: &[("message", "This value should be of type {{ type }}.")],
};

pub static CHOICE: ConstraintKind = ConstraintKind {
    name: "Choice",
    options: &["choices"],
    required: &["choices"],
    default_option: Some("choices"),
    messages: &[("message", "The value you selected is not a valid choice.")],
};

pub static ALL: ConstraintKind = ConstraintKind {
    name: "All",
    options: &["constraints"],
    required: &["constraints"],
    default_option: Some("constraints"),
    messages: &[],
};

/// The structured-map rule.
pub static COLLECTION: ConstraintKind = ConstraintKind {
    name: "Collection",
    options: &["fields", "allowExtraFields", "allowMissingFields"],
    required: &["fields"],
    default_option: Some("fields"),
    messages: &[
        ("extraFieldsMessage", "This field was not expected."),
        ("missingFieldsMessage", "This field is missing."),
    ],
};

/// Every built-in kind.
pub fn builtin() -> [&'static ConstraintKind; 9] {
    [
        &NOT_NULL,
        &NOT_BLANK,
        &LENGTH,
        &RANGE,
        &REGEX,
        &TYPE,
        &CHOICE,
        &ALL,
        &COLLECTION,
    ]
}
