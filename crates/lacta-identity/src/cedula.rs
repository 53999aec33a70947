//! # Cédula — National ID Checksum Validation
//!
//! Structural validation of the 10-digit national identification number
//! for natural persons. The layout is:
//!
//! - positions 0–1: province code, `01`–`24`
//! - position 2: person-type digit, `0`–`5` for natural persons
//!   (`6`–`9` mark juridical and foreign registrations, out of scope)
//! - positions 3–8: sequence number
//! - position 9: verifier digit, a modulus-10 weighted checksum over
//!   positions 0–8
//!
//! ## Checksum
//!
//! Each of the first nine digits is multiplied by its coefficient from
//! the alternating pattern `[2,1,2,1,2,1,2,1,2]`; products of 10 or more
//! are reduced by subtracting 9 (the coefficients are only 1 or 2, so a
//! product never exceeds 18 and a single subtraction is always enough —
//! this deliberately matches the registry's published algorithm rather
//! than a generalized digit-sum loop). The verifier digit is the distance
//! from the accumulated sum to the next multiple of 10, with 0 when the
//! sum is already a multiple of 10.
//!
//! ## Totality
//!
//! [`is_valid_cedula`] never panics and never errors: any malformed input
//! (wrong length, non-digits, bad province, juridical person, checksum
//! mismatch) is simply `false`. [`Cedula::parse`] is the structured
//! counterpart that reports *which* rule was violated.

use serde::{Deserialize, Serialize};

use crate::error::IdentityError;

/// Required length of a cédula, in ASCII digits.
pub const CEDULA_LEN: usize = 10;

/// Inclusive range of valid province codes.
pub const PROVINCE_RANGE: (u8, u8) = (1, 24);

/// Coefficients applied to the first nine digits, by position.
const COEFFICIENTS: [u8; 9] = [2, 1, 2, 1, 2, 1, 2, 1, 2];

/// A structurally valid national identification number.
///
/// Construction goes through [`Cedula::parse`], so a value of this type
/// always holds exactly ten ASCII digits with a valid province code,
/// natural-person type digit, and matching checksum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cedula(String);

impl Cedula {
    /// Parse and validate a cédula from its string form.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule, checked in layout order: length,
    /// digit characters, province code, person-type digit, checksum.
    pub fn parse(input: &str) -> Result<Self, IdentityError> {
        let digits = digits_of(input)?;

        let province = digits[0] * 10 + digits[1];
        if province < PROVINCE_RANGE.0 || province > PROVINCE_RANGE.1 {
            return Err(IdentityError::UnknownProvince { code: province });
        }

        if digits[2] >= 6 {
            return Err(IdentityError::NotNaturalPerson {
                type_digit: digits[2],
            });
        }

        let mut prefix = [0u8; 9];
        prefix.copy_from_slice(&digits[..9]);
        let expected = check_digit(&prefix);
        if expected != digits[9] {
            return Err(IdentityError::ChecksumMismatch {
                expected,
                actual: digits[9],
            });
        }

        Ok(Self(input.to_string()))
    }

    /// The cédula as the ten-digit string it was parsed from.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two-digit province code, `1`–`24`.
    pub fn province_code(&self) -> u8 {
        // Invariant: self.0 is ten ASCII digits.
        let bytes = self.0.as_bytes();
        (bytes[0] - b'0') * 10 + (bytes[1] - b'0')
    }
}

impl std::fmt::Display for Cedula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Cedula {
    type Error = IdentityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cedula> for String {
    fn from(value: Cedula) -> Self {
        value.0
    }
}

/// Whether `input` is a structurally valid cédula for a natural person.
///
/// Total function: returns `false` for any input that is not exactly ten
/// ASCII digits with province code 01–24, person-type digit 0–5, and a
/// matching verifier digit. Never panics.
pub fn is_valid_cedula(input: &str) -> bool {
    Cedula::parse(input).is_ok()
}

/// Compute the verifier digit for a nine-digit cédula prefix.
///
/// This is the modulus-10 weighted checksum described in the module docs.
/// Digits outside 0–9 are not representable here; the caller supplies raw
/// digit values, not ASCII.
pub fn check_digit(digits: &[u8; 9]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(COEFFICIENTS)
        .map(|(&d, coeff)| {
            let product = u32::from(d) * u32::from(coeff);
            if product >= 10 {
                product - 9
            } else {
                product
            }
        })
        .sum();

    ((10 - sum % 10) % 10) as u8
}

/// Decode an input string into exactly [`CEDULA_LEN`] digit values.
fn digits_of(input: &str) -> Result<[u8; CEDULA_LEN], IdentityError> {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() != CEDULA_LEN {
        return Err(IdentityError::WrongLength {
            expected: CEDULA_LEN,
            actual: chars.len(),
        });
    }

    let mut digits = [0u8; CEDULA_LEN];
    for (position, &c) in chars.iter().enumerate() {
        // Only the ASCII form counts: the registry issues ASCII digits,
        // and other Unicode decimal digits must not slip through.
        if !c.is_ascii_digit() {
            return Err(IdentityError::NonNumeric { position });
        }
        digits[position] = (c as u8) - b'0';
    }
    Ok(digits)
}
