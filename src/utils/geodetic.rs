use std::f64::consts::PI;

/// Semi-minor axis of the device's reference ellipsoid, in meters.
pub const SEMI_MINOR_AXIS_M: f64 = 6_356_752.314_2;

/// Convert a raw device-encoded northing to latitude in degrees.
///
/// Inverse of the spherical Mercator forward projection the plotter uses:
/// `lat = (180/π) · (2·atan(exp(v/R)) − π/2)`.
///
/// # Examples
/// ```
/// use slg2png::utils::geodetic::latitude_from_raw;
///
/// assert_eq!(latitude_from_raw(0), 0.0);
/// ```
pub fn latitude_from_raw(raw: i32) -> f64 {
    let x = raw as f64 / SEMI_MINOR_AXIS_M;
    (180.0 / PI) * (2.0 * x.exp().atan() - PI / 2.0)
}

/// Convert a raw device-encoded easting to longitude in degrees.
pub fn longitude_from_raw(raw: i32) -> f64 {
    (180.0 / PI) * raw as f64 / SEMI_MINOR_AXIS_M
}
