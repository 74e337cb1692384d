use chrono::NaiveDate;
use wavespell::vedic::*;

#[test]
fn test_ayanamsa_is_linear_in_year() {
    let y1900 = NaiveDate::from_ymd_opt(1900, 6, 1).unwrap();
    let y2000 = NaiveDate::from_ymd_opt(2000, 12, 31).unwrap();
    assert_eq!(ayanamsa_for(y1900), 22.46);
    assert!((ayanamsa_for(y2000) - 23.82).abs() < 1e-9);

    // only the calendar year matters
    let jan = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    assert_eq!(ayanamsa_for(jan), ayanamsa_for(y2000));
}

#[test]
fn test_to_sidereal_wraps() {
    let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
    assert!((to_sidereal(10.0, date) - 347.54).abs() < 1e-9);
    assert!((to_sidereal(412.46, date) - 30.0).abs() < 1e-9);
}

#[test]
fn test_custom_ayanamsa() {
    let flat = LinearAyanamsa {
        base: 24.0,
        rate: 0.0,
        base_year: 2000,
    };
    let date = NaiveDate::from_ymd_opt(1066, 10, 14).unwrap();
    assert_eq!(flat.ayanamsa_for(date), 24.0);
    assert_eq!(flat.to_sidereal(54.0, date), 30.0);
}

#[test]
fn test_nakshatra_padas_cycle() {
    // walk the circle one pada at a time, sampling mid-pada
    for step in 0..108 {
        let lon = (step as f64 + 0.5) * PADA_SIZE;
        let placement = nakshatra_for(lon);
        assert_eq!(placement.nakshatra.index, step / 4, "lon {}", lon);
        assert_eq!(placement.pada as usize, step % 4 + 1, "lon {}", lon);
        assert!(placement.nakshatra.start <= lon && lon < placement.nakshatra.end);
    }
}

#[test]
fn test_nakshatra_lords_repeat_every_nine() {
    for i in 9..27 {
        assert_eq!(NAKSHATRAS[i].lord, NAKSHATRAS[i - 9].lord);
    }
}

#[test]
fn test_nakshatra_normalizes_input() {
    assert_eq!(nakshatra_for(-1.0).nakshatra.name, "Revati");
    assert_eq!(nakshatra_for(360.0 + 20.0).nakshatra.name, "Bharani");
}

#[test]
fn test_nakshatra_placement_json_is_flat() {
    let json = serde_json::to_value(nakshatra_for(91.0)).unwrap();
    assert_eq!(json["name"], "Punarvasu");
    assert_eq!(json["gana"], "deva");
    assert_eq!(json["pada"], 4);
}
