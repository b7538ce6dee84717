// Copyright (C) 2025 The phonecmp Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::{error, trace};

use crate::normalizer::normalize;
use crate::reconcile::remainders_reconcilable;
use crate::region::RegionProfileTable;
use crate::suffix;

/// Shortest common trailing digit run accepted as evidence that two
/// differently-prefixed numbers reach the same subscriber. Seven digits is
/// the subscriber-number length of the NANP and of most European plans.
const MIN_MATCHED_DIGITS: usize = 7;

/// Stateless equivalence comparator over the compiled-in region table.
///
/// Construction is cheap and the comparator is `Sync`; the usual way to
/// use it is through [`crate::PHONE_COMPARATOR`].
pub struct PhoneComparator {
    regions: RegionProfileTable,
}

impl PhoneComparator {
    /// Builds a comparator from the compiled-in region rows.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in rows fail validation. The rows ship with
    /// the crate, so a failure here is a build defect, not a runtime
    /// condition callers can handle.
    pub fn new() -> Self {
        match RegionProfileTable::try_new() {
            Ok(regions) => Self { regions },
            Err(err) => {
                error!("compiled-in region data is invalid: {err}");
                panic!("compiled-in region data is invalid: {err}");
            }
        }
    }

    /// Builds a comparator over a caller-supplied region table.
    pub fn with_regions(regions: RegionProfileTable) -> Self {
        Self { regions }
    }

    /// Loose caller-ID equivalence.
    ///
    /// True when the two strings plausibly designate the same subscriber
    /// despite differences in separators, trunk prefixes, exit codes and
    /// country-code prefixes. `None` or empty input never matches
    /// anything, itself included.
    pub fn compare_loosely(&self, a: Option<&str>, b: Option<&str>) -> bool {
        let (Some(raw_a), Some(raw_b)) = (a, b) else {
            return false;
        };
        let norm_a = normalize(raw_a);
        let norm_b = normalize(raw_b);
        if norm_a.significant().is_empty() || norm_b.significant().is_empty() {
            return false;
        }

        if norm_a.is_alpha_content() != norm_b.is_alpha_content() {
            return false;
        }
        if norm_a.is_alpha_content() {
            // Letter-led strings are vanity or carrier tags with no digit
            // semantics to compare.
            return true;
        }

        if norm_a.leading_zero_count() > 0 || norm_b.leading_zero_count() > 0 {
            trace!(
                "leading zeros retained: {} in {:?}, {} in {:?}",
                norm_a.leading_zero_count(),
                norm_a.digits(),
                norm_b.leading_zero_count(),
                norm_b.digits()
            );
        }

        let outcome = suffix::align(norm_a.digits(), norm_b.digits());
        if outcome.remainder_a.is_empty() && outcome.remainder_b.is_empty() {
            return true;
        }
        if outcome.matched_digit_count < MIN_MATCHED_DIGITS {
            trace!(
                "trailing run of {} too short to compare prefixes",
                outcome.matched_digit_count
            );
            return false;
        }

        remainders_reconcilable(&norm_a, &norm_b, &self.regions)
    }

    /// Strict equivalence: same digits, tolerating only separators and a
    /// `+`-versus-exit-code difference on otherwise identical numbers.
    pub fn compare_strict(&self, a: Option<&str>, b: Option<&str>) -> bool {
        let (Some(raw_a), Some(raw_b)) = (a, b) else {
            return false;
        };
        let norm_a = normalize(raw_a);
        let norm_b = normalize(raw_b);
        if norm_a.significant().is_empty() || norm_b.significant().is_empty() {
            return false;
        }

        if norm_a.is_alpha_content() != norm_b.is_alpha_content() {
            return false;
        }
        if norm_a.is_alpha_content() {
            return norm_a.significant() == norm_b.significant();
        }

        if norm_a.digits() == norm_b.digits() {
            return true;
        }

        // "011 44 ..." against "+44 ...": the dialed exit code and the
        // symbolic plus are the same statement of intent.
        match (norm_a.has_leading_plus(), norm_b.has_leading_plus()) {
            (true, false) => self.dialed_form_matches_plus_form(norm_b.digits(), norm_a.digits()),
            (false, true) => self.dialed_form_matches_plus_form(norm_a.digits(), norm_b.digits()),
            _ => false,
        }
    }

    fn dialed_form_matches_plus_form(&self, dialed: &str, plus_digits: &str) -> bool {
        self.regions
            .idd_markers()
            .iter()
            .any(|marker| dialed.strip_prefix(marker) == Some(plus_digits))
    }
}

impl Default for PhoneComparator {
    fn default() -> Self {
        Self::new()
    }
}
