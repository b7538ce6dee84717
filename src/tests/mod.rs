mod loose_compare_tests;

use std::sync::Once;

use crate::{PhoneComparator, PHONE_COMPARATOR};

static ONCE: Once = Once::new();

/// Shared comparator for every integration test, with trace logging wired
/// up once so failing corpus entries can be diagnosed from the output.
fn comparator() -> &'static PhoneComparator {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
    &PHONE_COMPARATOR
}
