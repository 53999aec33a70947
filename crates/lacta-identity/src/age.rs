//! # Age-of-Majority Validation
//!
//! Calendar-accurate age checks for the registration flow. The reference
//! date ("today") is always an explicit parameter so the functions stay
//! pure and deterministic; nothing in this module reads the system clock.
//!
//! A birth date on or after the reference date is treated as invalid
//! input and rejected outright, not merely as "younger than 18".

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::IdentityError;

/// Age in whole years at which a person is considered an adult.
pub const MAJORITY_AGE_YEARS: u32 = 18;

/// A validated birth date, as received from a registration form.
///
/// The inner `NaiveDate` already guarantees a real calendar date; the
/// newtype exists so the form boundary can construct one from a raw
/// year/month/day triple with a structured rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Build a birth date from a year/month/day triple.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidDate`] when the triple does not
    /// name a real calendar date (month 13, February 30, and so on).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, IdentityError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(IdentityError::InvalidDate { year, month, day })
    }

    /// Access the inner calendar date.
    pub fn as_date(&self) -> NaiveDate {
        self.0
    }

    /// Whether this birth date denotes an adult as of `today`.
    pub fn is_adult_at(&self, today: NaiveDate) -> bool {
        is_adult(self.0, today)
    }
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Whether a person born on `birth_date` is at least
/// [`MAJORITY_AGE_YEARS`] old as of `today`.
///
/// Returns `false` when `birth_date` is on or after `today`: a same-day
/// or future birth date on a registration form is suspicious input, not
/// a minor.
pub fn is_adult(birth_date: NaiveDate, today: NaiveDate) -> bool {
    match whole_years_between(birth_date, today) {
        Some(years) => years >= MAJORITY_AGE_YEARS,
        None => false,
    }
}

/// Whole calendar years elapsed from `from` to `to`.
///
/// A birthday not yet reached in the final year does not count. Returns
/// `None` when `from` is on or after `to`.
pub fn whole_years_between(from: NaiveDate, to: NaiveDate) -> Option<u32> {
    if from >= to {
        return None;
    }

    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    // from < to, so the subtraction cannot go below zero.
    u32::try_from(years).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("test date must be valid")
    }

    // ---- is_adult boundaries ----

    #[test]
    fn test_exactly_eighteen_is_adult() {
        assert!(is_adult(date(2008, 8, 29), date(2026, 8, 29)));
    }

    #[test]
    fn test_one_day_short_is_not_adult() {
        assert!(!is_adult(date(2008, 8, 30), date(2026, 8, 29)));
    }

    #[test]
    fn test_well_over_eighteen_is_adult() {
        assert!(is_adult(date(1985, 1, 1), date(2026, 8, 29)));
    }

    #[test]
    fn test_same_day_birth_rejected() {
        assert!(!is_adult(date(2026, 8, 29), date(2026, 8, 29)));
    }

    #[test]
    fn test_future_birth_rejected() {
        assert!(!is_adult(date(2026, 8, 30), date(2026, 8, 29)));
        assert!(!is_adult(date(2050, 1, 1), date(2026, 8, 29)));
    }

    // ---- whole_years_between ----

    #[test]
    fn test_birthday_not_yet_reached() {
        assert_eq!(whole_years_between(date(2000, 12, 31), date(2026, 8, 29)), Some(25));
    }

    #[test]
    fn test_birthday_already_passed() {
        assert_eq!(whole_years_between(date(2000, 3, 1), date(2026, 8, 29)), Some(26));
    }

    #[test]
    fn test_birthday_today_counts() {
        assert_eq!(whole_years_between(date(2000, 8, 29), date(2026, 8, 29)), Some(26));
    }

    #[test]
    fn test_reversed_interval_is_none() {
        assert_eq!(whole_years_between(date(2026, 8, 29), date(2000, 1, 1)), None);
        assert_eq!(whole_years_between(date(2026, 8, 29), date(2026, 8, 29)), None);
    }

    #[test]
    fn test_leap_day_birthday() {
        // Born Feb 29; in a non-leap year the birthday is treated as not
        // yet reached on Feb 28 and as reached on Mar 1.
        assert_eq!(whole_years_between(date(2008, 2, 29), date(2026, 2, 28)), Some(17));
        assert_eq!(whole_years_between(date(2008, 2, 29), date(2026, 3, 1)), Some(18));
        assert!(!is_adult(date(2008, 2, 29), date(2026, 2, 28)));
        assert!(is_adult(date(2008, 2, 29), date(2026, 3, 1)));
    }

    // ---- BirthDate newtype ----

    #[test]
    fn test_from_ymd_valid() {
        let bd = BirthDate::from_ymd(1990, 6, 15).expect("valid date");
        assert_eq!(bd.as_date(), date(1990, 6, 15));
        assert_eq!(format!("{bd}"), "1990-06-15");
    }

    #[test]
    fn test_from_ymd_invalid() {
        assert_eq!(
            BirthDate::from_ymd(1990, 2, 30),
            Err(IdentityError::InvalidDate {
                year: 1990,
                month: 2,
                day: 30
            })
        );
        assert!(BirthDate::from_ymd(1990, 13, 1).is_err());
        assert!(BirthDate::from_ymd(1990, 0, 1).is_err());
    }

    #[test]
    fn test_is_adult_at_delegates() {
        let bd = BirthDate::from_ymd(2008, 8, 29).expect("valid date");
        assert!(bd.is_adult_at(date(2026, 8, 29)));
        assert!(!bd.is_adult_at(date(2026, 8, 28)));
    }

    #[test]
    fn test_serde_roundtrip() {
        let bd = BirthDate::from_ymd(1990, 6, 15).expect("valid date");
        let json = serde_json::to_string(&bd).expect("serialize");
        let parsed: BirthDate = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(bd, parsed);
    }
}
