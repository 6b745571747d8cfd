pub mod deal;
pub mod stakeholder;

/// Progress and probability fields are percentages; anything above 100 is
/// clamped at the record boundary so derivations never see out-of-range
/// values.
pub fn clamp_percent(value: u8) -> u8 {
    value.min(100)
}
