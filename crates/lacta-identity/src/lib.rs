//! # lacta-identity — Identity Validation Core for LactaCare
//!
//! This crate holds the client-side identity rules the LactaCare
//! registration and profile-completion flows run before submitting
//! anything to the backend: cédula (national ID) checksum validation,
//! age-of-majority checks, and the normalization/splitting helpers used
//! when importing an OAuth provider's display name.
//!
//! ## Key Design Principles
//!
//! 1. **Total boolean validators.** [`is_valid_cedula`] and [`is_adult`]
//!    never panic and never error: malformed input of any kind is simply
//!    `false`. The form layer can call them with raw user text.
//!
//! 2. **Validated newtypes for the structured path.** [`Cedula`] and
//!    [`BirthDate`] have constructors returning [`IdentityError`] with
//!    the specific violated rule, for flows that tell the user what to
//!    fix.
//!
//! 3. **Injected reference date.** Age checks take "today" as an explicit
//!    parameter; nothing in this crate reads the system clock.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `lacta-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Pure functions only: no global state, no caches, no I/O. Everything
//!   here is safe to call concurrently from any thread.
//! - All public value types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod age;
pub mod cedula;
pub mod error;
pub mod name;
pub mod text;

// Re-export primary types for ergonomic imports.
pub use age::{is_adult, whole_years_between, BirthDate, MAJORITY_AGE_YEARS};
pub use cedula::{check_digit, is_valid_cedula, Cedula, CEDULA_LEN};
pub use error::IdentityError;
pub use name::{split_display_name, SplitName};
pub use text::{capitalize_name, sanitize_text};
