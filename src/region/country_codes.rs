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

/// Country calling codes currently assigned by the ITU, sorted ascending.
///
/// Knowing which 1-3 digit codes are assigned is all the comparator needs
/// from the numbering plan: it lets `+593…` or `00 44 …` resolve to a
/// country without carrying per-country metadata for every one of them.
/// Shared codes are a single entry (1 covers the whole NANP, 7 covers
/// Russia and Kazakhstan).
const ASSIGNED_COUNTRY_CODES: &[u16] = &[
    1, 7, 20, 27, 30, 31, 32, 33, 34, 36, 39, 40, 41, 43, 44, 45, 46, 47, 48, 49, 51, 52, 53, 54,
    55, 56, 57, 58, 60, 61, 62, 63, 64, 65, 66, 81, 82, 84, 86, 90, 91, 92, 93, 94, 95, 98, 211,
    212, 213, 216, 218, 220, 221, 222, 223, 224, 225, 226, 227, 228, 229, 230, 231, 232, 233, 234,
    235, 236, 237, 238, 239, 240, 241, 242, 243, 244, 245, 246, 247, 248, 249, 250, 251, 252, 253,
    254, 255, 256, 257, 258, 260, 261, 262, 263, 264, 265, 266, 267, 268, 269, 290, 291, 297, 298,
    299, 350, 351, 352, 353, 354, 355, 356, 357, 358, 359, 370, 371, 372, 373, 374, 375, 376, 377,
    378, 380, 381, 382, 383, 385, 386, 387, 389, 420, 421, 423, 500, 501, 502, 503, 504, 505, 506,
    507, 508, 509, 590, 591, 592, 593, 594, 595, 596, 597, 598, 599, 670, 672, 673, 674, 675, 676,
    677, 678, 679, 680, 681, 682, 683, 685, 686, 687, 688, 689, 690, 691, 692, 800, 808, 850, 852,
    853, 855, 856, 870, 878, 880, 881, 882, 883, 886, 888, 960, 961, 962, 963, 964, 965, 966, 967,
    968, 970, 971, 972, 973, 974, 975, 976, 977, 992, 993, 994, 995, 996, 998,
];

pub(crate) fn is_assigned_country_code(code: u16) -> bool {
    ASSIGNED_COUNTRY_CODES.binary_search(&code).is_ok()
}

/// Scans up to three leading digits for the shortest assigned country
/// code, returning the code and how many digits it consumed.
///
/// Shortest-first is what actual dialing requires: because 1 is assigned,
/// a NANP number can never be misread as 19 (unassigned anyway), while 81
/// resolves only after two digits and 976 after three. A candidate never
/// starts with 0 — that is a trunk or exit digit, not a country code.
pub(crate) fn leading_country_code(digits: &str) -> Option<(u16, usize)> {
    let bytes = digits.as_bytes();
    match bytes.first() {
        Some(b'1'..=b'9') => {}
        _ => return None,
    }

    let mut code: u16 = 0;
    for (consumed, byte) in bytes.iter().take(3).enumerate() {
        if !byte.is_ascii_digit() {
            return None;
        }
        code = code * 10 + u16::from(byte - b'0');
        if is_assigned_country_code(code) {
            return Some((code, consumed + 1));
        }
    }
    None
}
