//! Degree arithmetic shared by the sign, nakshatra, house and aspect code.

use crate::error::{Result, WavespellError};

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let mut normalized = value % 360.0;
    while normalized < 0.0 {
        normalized += 360.0;
    }
    // -1e-15 % 360 + 360 rounds up to 360.0
    while normalized >= 360.0 {
        normalized -= 360.0;
    }
    normalized
}

/// Accept a longitude only if it already lies in [0, 360).
pub fn checked_longitude(value: f64) -> Result<f64> {
    if (0.0..360.0).contains(&value) {
        Ok(value)
    } else {
        Err(WavespellError::InvalidLongitude(value))
    }
}

/// Shorter arc between two longitudes, in [0, 180].
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (normalize_degrees(lon1) - normalize_degrees(lon2)).abs();
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

/// Format a longitude as `D°M'S"`, truncating each component.
pub fn format_degrees(longitude: f64) -> String {
    let degrees = longitude.floor();
    let minutes_total = (longitude - degrees) * 60.0;
    let minutes = minutes_total.floor();
    let seconds = ((minutes_total - minutes) * 60.0).floor();
    format!("{}°{}'{}\"", degrees as i64, minutes as i64, seconds as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert!(normalize_degrees(-1e-15) < 360.0);
    }

    #[test]
    fn test_checked_longitude() {
        assert_eq!(checked_longitude(0.0), Ok(0.0));
        assert_eq!(checked_longitude(359.5), Ok(359.5));
        assert!(checked_longitude(360.0).is_err());
        assert!(checked_longitude(-0.5).is_err());
        assert!(checked_longitude(f64::NAN).is_err());
    }

    #[test]
    fn test_angular_separation_takes_short_arc() {
        assert_eq!(angular_separation(10.0, 350.0), 20.0);
        assert_eq!(angular_separation(350.0, 10.0), 20.0);
        assert_eq!(angular_separation(0.0, 180.0), 180.0);
    }

    #[test]
    fn test_format_degrees() {
        assert_eq!(format_degrees(12.5), "12°30'0\"");
        assert_eq!(format_degrees(0.0), "0°0'0\"");
        assert_eq!(format_degrees(100.125), "100°7'30\"");
    }
}
