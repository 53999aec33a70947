//! # Display-Name Splitting — OAuth Profile Import
//!
//! Third-party sign-in providers hand over a single free-text display
//! name; the registration form stores four fields (two given names, two
//! family names). This module maps one onto the other.
//!
//! The token-count policy is a product decision, preserved as-is: with
//! two tokens the second is a family name ("Ana López"), with three the
//! middle token is a second given name ("Ana María López"), and anything
//! past four tokens is folded into the second family name. There is no
//! validation of token content; whatever the provider sent is accepted.

use serde::{Deserialize, Serialize};

/// A display name decomposed into the four local name fields.
///
/// Every field may be empty; see [`split_display_name`] for the mapping
/// policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitName {
    /// First given name.
    pub first_given: String,
    /// Second given name.
    pub second_given: String,
    /// First (paternal) family name.
    pub first_family: String,
    /// Second (maternal) family name.
    pub second_family: String,
}

impl SplitName {
    /// Whether all four fields are empty.
    pub fn is_empty(&self) -> bool {
        self.first_given.is_empty()
            && self.second_given.is_empty()
            && self.first_family.is_empty()
            && self.second_family.is_empty()
    }

    /// Re-join the non-empty fields into a single display name, in field
    /// order, separated by single spaces.
    pub fn full_name(&self) -> String {
        [
            &self.first_given,
            &self.second_given,
            &self.first_family,
            &self.second_family,
        ]
        .iter()
        .filter(|field| !field.is_empty())
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Split a free-text display name into the four local name fields.
///
/// The input is trimmed and split on whitespace runs; the resulting
/// tokens map by count:
///
/// | tokens | mapping |
/// |--------|---------|
/// | 0 | all fields empty |
/// | 1 | first given |
/// | 2 | first given, first family |
/// | 3 | first given, second given, first family |
/// | 4 | one-to-one in order |
/// | >4 | first three as above, the rest joined into second family |
///
/// Total function; token content is not validated.
pub fn split_display_name(full_name: &str) -> SplitName {
    let tokens: Vec<&str> = full_name.split_whitespace().collect();

    let owned = |t: &&str| (*t).to_string();
    match tokens.as_slice() {
        [] => SplitName::default(),
        [given] => SplitName {
            first_given: owned(given),
            ..SplitName::default()
        },
        [given, family] => SplitName {
            first_given: owned(given),
            first_family: owned(family),
            ..SplitName::default()
        },
        [given, second, family] => SplitName {
            first_given: owned(given),
            second_given: owned(second),
            first_family: owned(family),
            ..SplitName::default()
        },
        [given, second, family, second_family] => SplitName {
            first_given: owned(given),
            second_given: owned(second),
            first_family: owned(family),
            second_family: owned(second_family),
        },
        [given, second, family, rest @ ..] => SplitName {
            first_given: owned(given),
            second_given: owned(second),
            first_family: owned(family),
            second_family: rest.join(" "),
        },
    }
}
