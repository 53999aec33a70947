//! # Error Types — Identity Validation Failures
//!
//! Defines the error type returned by the validated constructors
//! (`Cedula::parse`, `BirthDate::from_ymd`). All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! The boolean validators (`is_valid_cedula`, `is_adult`) are total
//! functions that communicate invalid input as `false` and never produce
//! an error. The structured variants here exist for the constructor path,
//! where the registration form wants to tell the user *which* rule a
//! field violated.

use thiserror::Error;

/// Rejection reason for an identity field that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// The input does not have the required number of characters.
    #[error("expected {expected} characters, got {actual}")]
    WrongLength {
        /// Required length.
        expected: usize,
        /// Length of the rejected input.
        actual: usize,
    },

    /// A character that must be a decimal digit is not one.
    #[error("non-digit character at position {position}")]
    NonNumeric {
        /// Zero-based index of the offending character.
        position: usize,
    },

    /// The two-digit province prefix is outside the registry range 01–24.
    #[error("unknown province code {code:02}")]
    UnknownProvince {
        /// The decoded province code.
        code: u8,
    },

    /// The third digit denotes a juridical-person or foreign registration
    /// (values 6–9), which this validator does not cover.
    #[error("person-type digit {type_digit} is not a natural person")]
    NotNaturalPerson {
        /// The decoded person-type digit.
        type_digit: u8,
    },

    /// The weighted-digit checksum does not match the verifier digit.
    #[error("checksum mismatch: expected check digit {expected}, got {actual}")]
    ChecksumMismatch {
        /// Check digit computed from the first nine digits.
        expected: u8,
        /// Verifier digit actually present in the input.
        actual: u8,
    },

    /// The year/month/day triple does not name a real calendar date.
    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate {
        /// Proleptic Gregorian year.
        year: i32,
        /// Month number, 1–12.
        month: u32,
        /// Day of month, 1–31.
        day: u32,
    },
}
