//! Magnitude-to-style mapping for earthquake markers.
//!
//! Both functions are pure: a given magnitude always yields the same radius
//! and color within one build of the page.

/// Circle radius per unit of magnitude, in meters. Markers are drawn as
/// `L.circle`, whose radius is a map distance rather than a pixel count, so
/// a magnitude 5 event covers a ~125 km circle.
pub const RADIUS_SCALE: f64 = 25_000.0;

/// Inclusive upper bounds of the severity bands. A magnitude equal to a
/// bound belongs to the band it closes; anything above the last bound falls
/// into the catch-all band.
pub const BAND_UPPER_BOUNDS: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

/// One fill color per band, lowest magnitude first. The ramp is ordered so
/// a higher magnitude never maps to a calmer color.
pub const SEVERITY_PALETTE: [&str; 6] = [
    "#ffffb2", "#fed976", "#feb24c", "#fd8d3c", "#e31a1c", "#7a0177",
];

pub fn marker_radius(magnitude: f64) -> f64 {
    magnitude * RADIUS_SCALE
}

/// Index of the severity band holding `magnitude`. Total over all finite
/// inputs: negative and zero magnitudes land in the first band.
pub fn band_index(magnitude: f64) -> usize {
    BAND_UPPER_BOUNDS
        .iter()
        .position(|bound| magnitude <= *bound)
        .unwrap_or(BAND_UPPER_BOUNDS.len())
}

pub fn marker_color(magnitude: f64) -> &'static str {
    SEVERITY_PALETTE[band_index(magnitude)]
}
