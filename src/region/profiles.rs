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

use std::collections::HashMap;

use strum::{EnumIter, IntoEnumIterator};

use crate::errors::RegionDataError;
use crate::region::country_codes;

/// Trunk prefixes equivalent to "no prefix" for any region without its own
/// profile row.
pub(crate) const DEFAULT_TRUNK_PREFIXES: &[&str] = &["0", "00"];

/// Regions whose dialing conventions differ from the generic default.
/// Adding a region means adding a variant and a data row in
/// [`DialingRegion::profile`]; no comparison logic ever branches on the
/// variant itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum DialingRegion {
    /// The North American Numbering Plan: US, Canada and the Caribbean
    /// share country code 1.
    NorthAmerica,
    Russia,
    France,
    Hungary,
    Mexico,
    Mongolia,
    Thailand,
    Japan,
    China,
    UnitedKingdom,
}

/// Dialing conventions for one recognized country calling code.
///
/// Immutable static data; rows are validated once when the table is built
/// and looked up read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionProfile {
    /// The 1-3 digit country calling code this row applies to. Empty for
    /// the default profile.
    pub country_code: &'static str,
    /// Leading digit sequences equivalent to "no prefix" on a nationally
    /// formatted number.
    pub trunk_prefixes: &'static [&'static str],
    /// Exit-code shapes dialed in place of `+` when calling out of the
    /// region.
    pub idd_prefixes: &'static [&'static str],
    /// Whether a trunk digit appearing between the country code and the
    /// subscriber number may be dropped. Japanese mobile numbers are
    /// distinguished by the presence of that digit, so Japan says no; the
    /// NANP long-distance 1 is equally significant after a country code.
    pub trunk_ignorable_in_country_code: bool,
}

impl DialingRegion {
    pub fn profile(self) -> RegionProfile {
        match self {
            DialingRegion::NorthAmerica => RegionProfile {
                country_code: "1",
                trunk_prefixes: &["1", "0"],
                idd_prefixes: &["011"],
                trunk_ignorable_in_country_code: false,
            },
            DialingRegion::Russia => RegionProfile {
                country_code: "7",
                trunk_prefixes: &["8"],
                idd_prefixes: &["810"],
                trunk_ignorable_in_country_code: true,
            },
            DialingRegion::France => RegionProfile {
                country_code: "33",
                trunk_prefixes: &["0"],
                idd_prefixes: &["00"],
                trunk_ignorable_in_country_code: true,
            },
            DialingRegion::Hungary => RegionProfile {
                country_code: "36",
                trunk_prefixes: &["06"],
                idd_prefixes: &["00"],
                trunk_ignorable_in_country_code: true,
            },
            DialingRegion::Mexico => RegionProfile {
                country_code: "52",
                trunk_prefixes: &["01"],
                idd_prefixes: &["00"],
                trunk_ignorable_in_country_code: true,
            },
            DialingRegion::Mongolia => RegionProfile {
                country_code: "976",
                trunk_prefixes: &["01", "02"],
                idd_prefixes: &["001", "002"],
                trunk_ignorable_in_country_code: true,
            },
            DialingRegion::Thailand => RegionProfile {
                country_code: "66",
                trunk_prefixes: &["0"],
                idd_prefixes: &["001"],
                trunk_ignorable_in_country_code: true,
            },
            DialingRegion::Japan => RegionProfile {
                country_code: "81",
                trunk_prefixes: &["0"],
                idd_prefixes: &["010"],
                trunk_ignorable_in_country_code: false,
            },
            DialingRegion::China => RegionProfile {
                country_code: "86",
                trunk_prefixes: &["0"],
                idd_prefixes: &["00"],
                trunk_ignorable_in_country_code: true,
            },
            DialingRegion::UnitedKingdom => RegionProfile {
                country_code: "44",
                trunk_prefixes: &["0"],
                idd_prefixes: &["00"],
                trunk_ignorable_in_country_code: true,
            },
        }
    }
}

/// The default profile, returned when no dedicated row covers a country
/// code. A bare `0` is deliberately absent from its IDD set: it is
/// ambiguous with the trunk prefix and is handled by the trunk rules.
/// The bare `1` covers the long-distance digit that broken NANP caller-ID
/// equipment prepends to fully qualified international numbers.
fn default_profile() -> RegionProfile {
    RegionProfile {
        country_code: "",
        trunk_prefixes: DEFAULT_TRUNK_PREFIXES,
        idd_prefixes: &["011", "1", "010", "810"],
        trunk_ignorable_in_country_code: true,
    }
}

/// Immutable lookup table of dialing conventions, built once at process
/// start. Concurrent readers need no synchronization.
#[derive(Debug)]
pub struct RegionProfileTable {
    profiles: HashMap<u16, RegionProfile>,
    default_profile: RegionProfile,
    /// Union of every profile's IDD prefixes, longest first, used when
    /// scanning a number for an exit marker before the country code is
    /// known.
    idd_markers: Vec<&'static str>,
}

fn validate(profile: &RegionProfile) -> Result<(), RegionDataError> {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    for prefix in profile.trunk_prefixes.iter().chain(profile.idd_prefixes) {
        if !all_digits(prefix) {
            return Err(RegionDataError::InvalidPrefix {
                country_code: profile.country_code,
                prefix,
            });
        }
    }
    for prefix in profile.trunk_prefixes {
        if profile.idd_prefixes.contains(prefix) {
            return Err(RegionDataError::OverlappingPrefixes {
                country_code: profile.country_code,
                prefix,
            });
        }
    }
    Ok(())
}

impl RegionProfileTable {
    /// Builds and validates the table from the compiled-in rows.
    pub fn try_new() -> Result<Self, RegionDataError> {
        let default_profile = default_profile();
        validate(&default_profile)?;

        let mut profiles = HashMap::new();
        let mut idd_markers: Vec<&'static str> = default_profile.idd_prefixes.to_vec();

        for region in DialingRegion::iter() {
            let profile = region.profile();
            validate(&profile)?;

            let code: u16 = profile
                .country_code
                .parse()
                .ok()
                .filter(|_| (1..=3).contains(&profile.country_code.len()))
                .ok_or(RegionDataError::InvalidCountryCode(profile.country_code))?;

            idd_markers.extend(profile.idd_prefixes);
            if profiles.insert(code, profile).is_some() {
                return Err(RegionDataError::DuplicateCountryCode(code));
            }
        }

        idd_markers.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        idd_markers.dedup();

        Ok(Self {
            profiles,
            default_profile,
            idd_markers,
        })
    }

    /// Returns the profile for a recognized country code, falling back to
    /// the default conventions for every other assigned code.
    pub fn profile_for(&self, country_code: u16) -> &RegionProfile {
        self.profiles
            .get(&country_code)
            .unwrap_or(&self.default_profile)
    }

    /// Recognized IDD exit markers, longest first.
    pub(crate) fn idd_markers(&self) -> &[&'static str] {
        &self.idd_markers
    }

    /// Shortest assigned country code at the head of `digits`, with the
    /// number of digits it consumed.
    pub(crate) fn leading_country_code(&self, digits: &str) -> Option<(u16, usize)> {
        country_codes::leading_country_code(digits)
    }
}
