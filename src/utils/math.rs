//! Mathematical utility functions for label placement and scaling

/// Median of `values`, averaging the two middle elements for even lengths.
///
/// Returns `None` for an empty slice. NaN values sort last.
///
/// # Examples
/// ```
/// use step_heatmap::utils::math::median;
///
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
/// assert_eq!(median(&[0.0, 0.0, 1.0, 1.0]), Some(0.5));
/// assert_eq!(median(&[]), None);
/// ```
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}
