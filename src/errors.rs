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

use thiserror::Error;

/// Raised by [`crate::RegionProfileTable::try_new`] when the compiled-in
/// region rows violate their invariants. The comparison predicates
/// themselves never fail; every degraded input compares as "no match".
#[derive(Debug, PartialEq, Eq, Error)]
pub enum RegionDataError {
    #[error("country code {0:?} is not a 1-3 digit sequence")]
    InvalidCountryCode(&'static str),

    #[error("more than one profile declares country code {0}")]
    DuplicateCountryCode(u16),

    #[error("prefix {prefix:?} of region {country_code:?} is not a non-empty digit sequence")]
    InvalidPrefix {
        country_code: &'static str,
        prefix: &'static str,
    },

    #[error("prefix {prefix:?} of region {country_code:?} is listed as both trunk and IDD")]
    OverlappingPrefixes {
        country_code: &'static str,
        prefix: &'static str,
    },
}
