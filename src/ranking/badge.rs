/// Converts a percentile (0–100) into a standing badge.
///
/// | Range    | Badge      |
/// |----------|------------|
/// | >= 90    | top-10%    |
/// | >= 75    | top-25%    |
/// | >= 50    | top-50%    |
/// | < 50     | bottom-50% |
pub fn badge(percentile: f64) -> String {
    match percentile {
        p if p >= 90.0 => "top-10%".into(),
        p if p >= 75.0 => "top-25%".into(),
        p if p >= 50.0 => "top-50%".into(),
        _ => "bottom-50%".into(),
    }
}
