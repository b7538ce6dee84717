//! Loose and strict equivalence comparison for phone numbers and caller-ID
//! strings.
//!
//! The loose predicate decides whether two differently-formatted strings
//! should be treated as the same subscriber for caller-ID matching. It
//! tolerates formatting punctuation, national trunk (NDD) prefixes,
//! international dialing (IDD) exit codes and country-calling-code
//! prefixes, using only a small built-in table of dialing conventions —
//! no numbering-plan database and no network access.
//!
//! ```
//! use phonecmp::PHONE_COMPARATOR;
//!
//! assert!(PHONE_COMPARATOR.compare_loosely(Some("650-253-0000"), Some("1-650-253-0000")));
//! assert!(PHONE_COMPARATOR.compare_loosely(Some("090-1234-5678"), Some("+819012345678")));
//! assert!(!PHONE_COMPARATOR.compare_loosely(Some("+19012345678"), Some("+819012345678")));
//! ```

mod comparator;
mod normalizer;
mod reconcile;
mod region;
mod suffix;
pub mod errors;

use std::sync::LazyLock;

pub use comparator::PhoneComparator;
pub use region::{DialingRegion, RegionProfile, RegionProfileTable};

#[cfg(test)]
mod tests;

/// Shared process-wide comparator instance, built on first use from the
/// compiled-in region data.
pub static PHONE_COMPARATOR: LazyLock<PhoneComparator> = LazyLock::new(PhoneComparator::new);
