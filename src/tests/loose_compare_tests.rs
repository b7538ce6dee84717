use super::comparator;

fn assert_loose(a: &str, b: &str, expected: bool) {
    let cmp = comparator();
    assert_eq!(
        cmp.compare_loosely(Some(a), Some(b)),
        expected,
        "compare_loosely({a:?}, {b:?}) should be {expected}"
    );
    // the predicate is symmetric
    assert_eq!(
        cmp.compare_loosely(Some(b), Some(a)),
        expected,
        "compare_loosely({b:?}, {a:?}) should be {expected}"
    );
}

#[test]
fn missing_or_empty_input_never_matches() {
    let cmp = comparator();
    assert!(!cmp.compare_loosely(None, None));
    assert!(!cmp.compare_loosely(None, Some("6502530000")));
    assert!(!cmp.compare_loosely(Some("6502530000"), None));
    assert!(!cmp.compare_loosely(Some(""), Some("")));
    assert!(!cmp.compare_loosely(Some(""), Some("6502530000")));
    assert!(!cmp.compare_loosely(Some(" - "), Some("6502530000")));
}

#[test]
fn identical_short_numbers_match_themselves() {
    assert_loose("999", "999", true);
    assert_loose("119", "119", true);
}

#[test]
fn short_trailing_runs_do_not_match() {
    assert_loose("123456789", "923456789", false);
    assert_loose("123456789", "123456781", false);
    assert_loose("123456789", "1234567890", false);
    assert_loose("1-800-flowers", "800-flowers", false);
}

#[test]
fn one_extra_leading_digit_is_a_prefix_question() {
    // trunk 0 on one side
    assert_loose("123456789", "0123456789", true);
    // NANP long-distance 1 on one side
    assert_loose("650-000-3456", "16500003456", true);
}

#[test]
fn separators_and_nanp_prefixes_are_tolerated() {
    assert_loose("650-253-0000", "6502530000", true);
    assert_loose("650 253 0000", "650.253.0000", true);
    assert_loose("1-650-253-0000", "6502530000", true);
    assert_loose("+1 650-253-0000", "6502530000", true);
    assert_loose("001 650-253-0000", "6502530000", true);
    assert_loose("0111 650-253-0000", "6502530000", true);
    assert_loose("11-650-253-0000", "650-253-0000", true);
    assert_loose("0-650-253-0000", "650-253-0000", true);
}

#[test]
fn exit_code_forms_match_the_plus_form() {
    assert_loose("011 1 700 555 4141", "+17005554141", true);
    // a doubled long-distance digit is a different dialed number
    assert_loose("011 11 700 555 4141", "+17005554141", false);
}

#[test]
fn different_country_codes_never_match() {
    assert_loose("+19012345678", "+819012345678", false);
    assert_loose("290-1234-5678", "+819012345678", false);
}

#[test]
fn japan_trunk_zero_is_significant() {
    assert_loose("090-1234-5678", "+819012345678", true);
    assert_loose("090(1234)5678", "+819012345678", true);
    assert_loose("+81-90-1234-5678", "090-1234-5678", true);
    // mobile prefixes 080 and 090 are different subscribers
    assert_loose("080-1234-5678", "+819012345678", false);
    assert_loose("090-1234-5678", "080-1234-5678", false);
    assert_loose("090-1234-5678", "190-1234-5678", false);
    assert_loose("090-1234-5678", "890-1234-5678", false);
    // the trunk digit may not ride along inside the international form
    assert_loose("+81-90-1234-5678", "+81-090-1234-5678", false);
    assert_loose("+818012345678", "+819012345678", false);
}

#[test]
fn national_trunk_prefixes_match_per_region() {
    // Russia dials 8 nationally
    assert_loose("+79161234567", "89161234567", true);
    // France dials 0
    assert_loose("+33123456789", "0123456789", true);
    // Hungary dials 06
    assert_loose("+36 1 234 5678", "06 1234-5678", true);
    // Mexico dials 01
    assert_loose("+52 55 1234 5678", "01 55 1234 5678", true);
    // Mongolia dials 01 or 02 depending on the carrier
    assert_loose("+976 11 123456", "01 11 123456", true);
    assert_loose("+976 11 123456", "02 11 123456", true);
    // China dials 0
    assert_loose("+86 10 1234 5678", "010 1234 5678", true);
}

#[test]
fn regions_without_a_profile_row_use_the_default_trunk() {
    // Netherlands
    assert_loose("+31771234567", "0771234567", true);
    // Ecuador
    assert_loose("+593(800)123-1234", "8001231234", true);
    assert_loose("008001231234", "8001231234", true);
}

#[test]
fn uk_exit_code_form_matches_plus_form() {
    assert_loose("+44 207 792 3490", "00 207 792 3490", true);
}

#[test]
fn thailand_accepts_a_stray_long_distance_one() {
    assert_loose("+66811234567", "166811234567", true);
    assert_loose("16610001234", "6610001234", true);
}

#[test]
fn similar_numbers_with_wrong_prefixes_do_not_match() {
    assert_loose("0550-450-3605", "+15504503605", true);
    assert_loose("550-450-3605", "+14504503605", false);
    assert_loose("5504503605", "+14504503605", false);
    assert_loose("0550-450-3605", "+15404503605", false);
    assert_loose("0550-450-3605", "+15514503605", false);
}

#[test]
fn letter_led_strings_compare_as_a_class() {
    // vanity strings carry no digit semantics
    assert_loose("abcd", "abcd", true);
    assert_loose("abcd", "bcde", true);
    assert_loose("flowers", "1-800-flowers", false);
}

#[test]
fn unicode_decimal_digits_fold_before_comparison() {
    assert_loose("６５０-２５３-0000", "650-253-0000", true);
}

#[test]
fn loose_compare_is_reflexive_over_the_corpus() {
    let cmp = comparator();
    let corpus = vec![
        "6502530000",
        "+1 650-253-0000",
        "090-1234-5678",
        "+819012345678",
        "011 1 700 555 4141",
        "008001231234",
        "999",
    ];
    for number in corpus {
        assert!(
            cmp.compare_loosely(Some(number), Some(number)),
            "{number:?} should match itself"
        );
    }
}
