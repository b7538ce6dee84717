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

/// A raw input with formatting stripped, ready for suffix alignment.
///
/// Built once per input, owned by the comparison that created it; nothing
/// is cached or shared across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NormalizedNumber {
    /// Every retained character in original order: digits, letters and the
    /// occasional dialable symbol such as `*`. Never contains separators
    /// or `+`.
    significant: String,
    /// The decimal digits of `significant`, ASCII after folding.
    digits: String,
    has_leading_plus: bool,
    leading_zero_count: usize,
    is_alpha_content: bool,
}

/// Characters dropped without affecting classification. `#` shows up in
/// stored caller-ID strings as a grouping symbol, so it is treated the same
/// way as punctuation.
fn is_separator(c: char) -> bool {
    matches!(c, '-' | '.' | '(' | ')' | '#') || c.is_whitespace()
}

/// Strips separators and classifies the input as digit-led or letter-led.
///
/// Classification is a property of the first retained character only: a
/// leading digit marks the whole string numeric even if letters follow
/// ("1-800-flowers" is numeric-led). Any Unicode decimal digit is folded
/// to its ASCII form first. Total function; malformed content is carried
/// through as opaque characters.
pub(crate) fn normalize(raw: &str) -> NormalizedNumber {
    let folded = dec_from_char::normalize_decimals(raw);

    let mut significant = String::with_capacity(folded.len());
    let mut digits = String::with_capacity(folded.len());
    let mut has_leading_plus = false;
    let mut is_alpha_content = false;

    for c in folded.chars() {
        if is_separator(c) {
            continue;
        }
        if c == '+' {
            if significant.is_empty() {
                has_leading_plus = true;
            }
            continue;
        }
        if significant.is_empty() {
            is_alpha_content = c.is_alphabetic();
        }
        significant.push(c);
        if c.is_ascii_digit() {
            digits.push(c);
        }
    }

    let leading_zero_count = digits.bytes().take_while(|b| *b == b'0').count();
    NormalizedNumber {
        significant,
        digits,
        has_leading_plus,
        leading_zero_count,
        is_alpha_content,
    }
}

impl NormalizedNumber {
    pub fn significant(&self) -> &str {
        &self.significant
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn has_leading_plus(&self) -> bool {
        self.has_leading_plus
    }

    pub fn leading_zero_count(&self) -> usize {
        self.leading_zero_count
    }

    pub fn is_alpha_content(&self) -> bool {
        self.is_alpha_content
    }
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn drops_separators_and_keeps_digit_order() {
        let n = normalize("650-253.0000 #");
        assert_eq!(n.digits(), "6502530000");
        assert_eq!(n.significant(), "6502530000");
        assert!(!n.has_leading_plus());
        assert!(!n.is_alpha_content());
    }

    #[test]
    fn leading_plus_is_flagged_and_dropped() {
        let n = normalize("+81 (90) 1234-5678");
        assert!(n.has_leading_plus());
        assert_eq!(n.digits(), "819012345678");
    }

    #[test]
    fn leading_zeros_are_counted_but_kept() {
        let n = normalize("008001231234");
        assert_eq!(n.leading_zero_count(), 2);
        assert_eq!(n.digits(), "008001231234");
    }

    #[test]
    fn first_retained_character_fixes_classification() {
        assert!(!normalize("1-800-flowers").is_alpha_content());
        assert!(normalize("flowers").is_alpha_content());
        // separators and '+' do not participate in classification
        assert!(normalize(" - (+1) 23").has_leading_plus());
        assert!(normalize(" - abc").is_alpha_content());
    }

    #[test]
    fn letters_never_enter_the_digit_sequence() {
        let n = normalize("1-800-flowers");
        assert_eq!(n.digits(), "1800");
        assert_eq!(n.significant(), "1800flowers");
    }

    #[test]
    fn unicode_decimals_fold_to_ascii() {
        let n = normalize("６５０-２５３-0000");
        assert_eq!(n.digits(), "6502530000");
    }

    #[test]
    fn empty_input_yields_empty_sequences() {
        let n = normalize("");
        assert_eq!(n.digits(), "");
        assert_eq!(n.significant(), "");
        assert!(!n.is_alpha_content());
    }
}
