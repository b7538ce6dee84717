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

//! Decides whether two digit sequences that share a long trailing run are
//! prefix-compatible variants of the same number.
//!
//! The suffix matcher's greedy right-to-left run can consume digits across
//! the true prefix boundary (the shared `6` of Hungary's trunk `06` and
//! country code `36`, for example), so reconciliation re-reads each whole
//! normalized form from the left instead of trusting the raw remainders:
//! every way of reading a side as "exit marker + country code + rest" or
//! as a nationally dialed number is enumerated, and the two sides match if
//! any pair of readings agrees under the region's conventions.

use log::trace;

use crate::normalizer::NormalizedNumber;
use crate::region::{RegionProfile, RegionProfileTable, DEFAULT_TRUNK_PREFIXES};

/// Trunk digits accepted as the single connecting prefix between two
/// nationally dialed forms. The `1` is the NANP long-distance digit.
const NATIONAL_TRUNK_EQUIVALENTS: &[&str] = &["0", "00", "1"];

/// One way of reading a normalized number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Interpretation<'a> {
    /// Exit marker (or `+`) followed by an assigned country code; `rest`
    /// is everything after the code.
    International { country_code: u16, rest: &'a str },
    /// The digit sequence as dialed, trunk prefix and all.
    National { digits: &'a str },
}

/// Enumerates the plausible readings of one side.
///
/// A plus-led number is unambiguously international, so it gets no
/// national reading unless no assigned country code follows the `+`.
fn interpretations<'a>(
    number: &'a NormalizedNumber,
    regions: &RegionProfileTable,
) -> Vec<Interpretation<'a>> {
    let digits = number.digits();
    let mut found = Vec::new();

    if number.has_leading_plus() {
        if let Some((country_code, consumed)) = regions.leading_country_code(digits) {
            found.push(Interpretation::International {
                country_code,
                rest: &digits[consumed..],
            });
            return found;
        }
        found.push(Interpretation::National { digits });
        return found;
    }

    found.push(Interpretation::National { digits });
    for marker in regions.idd_markers() {
        let Some(tail) = digits.strip_prefix(marker) else {
            continue;
        };
        if let Some((country_code, consumed)) = regions.leading_country_code(tail) {
            found.push(Interpretation::International {
                country_code,
                rest: &tail[consumed..],
            });
        }
    }
    found
}

/// Trunk prefixes worth trying for a given profile: the region's own rows
/// first, then the generic defaults.
fn trunk_candidates(profile: &RegionProfile) -> impl Iterator<Item = &'static str> + '_ {
    profile
        .trunk_prefixes
        .iter()
        .chain(DEFAULT_TRUNK_PREFIXES.iter())
        .copied()
}

/// True when `dialed` equals `rest` after shedding one recognized trunk
/// prefix.
fn matches_with_trunk(profile: &RegionProfile, dialed: &str, rest: &str) -> bool {
    trunk_candidates(profile).any(|t| dialed.strip_prefix(t) == Some(rest))
}

fn readings_agree(
    a: Interpretation<'_>,
    b: Interpretation<'_>,
    regions: &RegionProfileTable,
) -> bool {
    use Interpretation::{International, National};

    match (a, b) {
        (
            International {
                country_code: code_a,
                rest: rest_a,
            },
            International {
                country_code: code_b,
                rest: rest_b,
            },
        ) => {
            // A number resolving to country code 1 never loosely matches
            // one resolving to 81, however long the shared suffix.
            if code_a != code_b {
                return false;
            }
            if rest_a == rest_b {
                return true;
            }
            // One side kept its trunk digit inside the international form.
            // Japan and the NANP treat that digit as significant.
            let profile = regions.profile_for(code_a);
            profile.trunk_ignorable_in_country_code
                && (matches_with_trunk(profile, rest_a, rest_b)
                    || matches_with_trunk(profile, rest_b, rest_a))
        }
        (International { country_code, rest }, National { digits })
        | (National { digits }, International { country_code, rest }) => {
            let profile = regions.profile_for(country_code);
            digits == rest || matches_with_trunk(profile, digits, rest)
        }
        (National { digits: dialed_a }, National { digits: dialed_b }) => {
            NATIONAL_TRUNK_EQUIVALENTS.iter().any(|t| {
                dialed_a.strip_prefix(t) == Some(dialed_b)
                    || dialed_b.strip_prefix(t) == Some(dialed_a)
            })
        }
    }
}

/// True when some pair of readings of the two sides designates the same
/// subscriber. Symmetric by construction: every pair is tried both ways.
pub(crate) fn remainders_reconcilable(
    a: &NormalizedNumber,
    b: &NormalizedNumber,
    regions: &RegionProfileTable,
) -> bool {
    let readings_a = interpretations(a, regions);
    let readings_b = interpretations(b, regions);

    for reading_a in &readings_a {
        for reading_b in &readings_b {
            if readings_agree(*reading_a, *reading_b, regions) {
                trace!(
                    "prefixes reconciled: {:?} against {:?}",
                    reading_a,
                    reading_b
                );
                return true;
            }
        }
    }
    false
}
