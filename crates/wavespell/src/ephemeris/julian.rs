use chrono::{Datelike, NaiveDate};

/// Julian Day of the J2000.0 epoch.
pub const J2000: f64 = 2451545.0;

/// Julian Day Number of a proleptic Gregorian civil date (the day's noon).
pub fn julian_day_number(date: NaiveDate) -> i64 {
    let month = date.month() as i64;
    let a = (14 - month) / 12;
    let y = date.year() as i64 + 4800 - a;
    let m = month + 12 * a - 3;

    date.day() as i64 + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Days elapsed since J2000.0 at the date's Julian Day Number.
pub fn days_since_j2000(date: NaiveDate) -> f64 {
    julian_day_number(date) as f64 - J2000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_julian_day_number_known_dates() {
        let j2000 = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(julian_day_number(j2000), 2451545);
        let epoch = NaiveDate::from_ymd_opt(1987, 7, 26).unwrap();
        assert_eq!(julian_day_number(epoch), 2447003);
        let gregorian_start = NaiveDate::from_ymd_opt(1582, 10, 15).unwrap();
        assert_eq!(julian_day_number(gregorian_start), 2299161);
    }

    #[test]
    fn test_julian_day_matches_day_count() {
        let a = NaiveDate::from_ymd_opt(1969, 7, 20).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let days = b.signed_duration_since(a).num_days();
        assert_eq!(julian_day_number(b) - julian_day_number(a), days);
    }
}
