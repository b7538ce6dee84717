mod country_codes;
mod profiles;

pub(crate) use profiles::DEFAULT_TRUNK_PREFIXES;
pub use profiles::{DialingRegion, RegionProfile, RegionProfileTable};
