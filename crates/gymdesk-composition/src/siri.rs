/// Siri (1961): body fat percentage from body density, unrounded.
///
/// Densities above roughly 1.1 g/cm³ imply a negative fat fraction; those
/// are floored at zero.
pub fn fat_percent(body_density: f64) -> f64 {
    ((4.95 / body_density - 4.5) * 100.0).max(0.0)
}
