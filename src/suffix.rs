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

/// Result of right-aligning two digit sequences. Transient; lives only
/// inside a single comparison call.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct MatchOutcome<'a> {
    /// Length of the common trailing run. Never exceeds the shorter input.
    pub matched_digit_count: usize,
    /// Unconsumed leading digits of the first input (possibly empty).
    pub remainder_a: &'a str,
    /// Unconsumed leading digits of the second input (possibly empty).
    pub remainder_b: &'a str,
}

/// Walks both sequences from their last digit backwards in lock-step,
/// extending the run while the digits agree. Inputs are ASCII digit
/// strings produced by the normalizer.
pub(crate) fn align<'a>(a: &'a str, b: &'a str) -> MatchOutcome<'a> {
    let bytes_a = a.as_bytes();
    let bytes_b = b.as_bytes();
    let mut i = bytes_a.len();
    let mut j = bytes_b.len();

    while i > 0 && j > 0 && bytes_a[i - 1] == bytes_b[j - 1] {
        i -= 1;
        j -= 1;
    }

    MatchOutcome {
        matched_digit_count: bytes_a.len() - i,
        remainder_a: &a[..i],
        remainder_b: &b[..j],
    }
}
