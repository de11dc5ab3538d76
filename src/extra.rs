//! Tools around the cross engine: ratio analysis, offspring sampling and instance generation.

/// Ratio reduction, share formatting and goodness-of-fit
pub mod analysis;
/// Parent generators and cross parsers
pub mod instance_generators;
/// Random offspring draws
pub mod sampling;
