//! Built-in checkers.
//!
//! Leaf checkers accept `null`; `NotNull` and `NotBlank` are the rules that
//! reject it.

mod all;
mod choice;
mod collection;
mod length;
mod not_blank;
mod not_null;
mod range;
mod regex;
mod type_of;

pub use all::AllChecker;
pub use choice::{ChoiceChecker, NO_SUCH_CHOICE_ERROR};
pub use collection::{CollectionChecker, MISSING_FIELD_ERROR, NO_SUCH_FIELD_ERROR};
pub use length::{LengthChecker, NOT_EQUAL_LENGTH_ERROR, TOO_LONG_ERROR, TOO_SHORT_ERROR};
pub use not_blank::{NotBlankChecker, IS_BLANK_ERROR};
pub use not_null::{NotNullChecker, IS_NULL_ERROR};
pub use range::{RangeChecker, INVALID_NUMBER_ERROR, TOO_HIGH_ERROR, TOO_LOW_ERROR};
pub use regex::{RegexChecker, REGEX_FAILED_ERROR};
pub use type_of::{TypeChecker, INVALID_TYPE_ERROR};
