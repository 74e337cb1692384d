use chrono::{Duration, NaiveDate};
use wavespell::dreamspell::*;
use wavespell::WavespellError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_epoch_signature() {
    let calendar = DreamspellCalendar::default();
    let signature = calendar.signature_for(date(1987, 7, 26));

    assert_eq!(signature.kin.get(), 8);

    // tone and seal checked against both projections independently
    let kin = signature.kin.get();
    assert_eq!(((kin - 1) % 13 + 1) as u8, signature.galactic_tone.id);
    assert_eq!(((kin - 1) % 20 + 1) as u8, signature.solar_seal.id);
    assert_eq!(signature.galactic_tone.id, 8);
    assert_eq!(signature.galactic_tone.name, "Galactic");
    assert_eq!(signature.solar_seal.id, 8);
    assert_eq!(signature.solar_seal.name, "Yellow Star");
    assert_eq!(signature.color, SealColor::Yellow);
    assert_eq!(signature.wavespell, 1);
    assert_eq!(signature.to_string(), "Galactic Yellow Star");
}

#[test]
fn test_cycle_repeats_every_260_days() {
    let calendar = DreamspellCalendar::default();
    let epoch = date(1987, 7, 26);
    assert_eq!(
        calendar.date_to_kin(epoch + Duration::days(260)),
        calendar.date_to_kin(epoch)
    );

    let mut day = date(1850, 1, 1);
    while day < date(2150, 1, 1) {
        let kin = calendar.date_to_kin(day);
        assert_eq!(calendar.date_to_kin(day + Duration::days(260)), kin);
        assert!((1..=260).contains(&kin.get()));
        day += Duration::days(97);
    }
}

#[test]
fn test_consecutive_days_advance_one_kin() {
    let calendar = DreamspellCalendar::default();
    let mut day = date(1700, 3, 1);
    let mut previous = calendar.date_to_kin(day);
    for _ in 0..600 {
        day += Duration::days(1);
        let kin = calendar.date_to_kin(day);
        let expected = if previous.get() == 260 { 1 } else { previous.get() + 1 };
        assert_eq!(kin.get(), expected);
        previous = kin;
    }
}

#[test]
fn test_signature_invariants_for_every_kin() {
    for kin in Kin::all() {
        let ToneAndSeal { tone, seal } = kin_to_tone_and_seal(kin);
        assert!((1..=13).contains(&tone));
        assert!((1..=20).contains(&seal));

        let wavespell = wavespell_of(kin);
        assert!((1..=20).contains(&wavespell));

        let family = wavespell_family(kin);
        assert_eq!(family.len(), 13);
        assert!(family.contains(&kin));
        for pair in family.windows(2) {
            assert_eq!(pair[1].get(), pair[0].get() + 1);
        }
        // position inside the wavespell is the tone
        let position = kin.get() - (wavespell as u16 - 1) * 13;
        assert_eq!(position as u8, tone);

        let signature = signature_for_kin(kin);
        assert_eq!(signature.color, signature.solar_seal.color);
    }
}

#[test]
fn test_oracle_properties() {
    for kin in Kin::all() {
        let oracle = oracle_for(kin);
        assert_eq!(oracle.destiny, kin);
        assert_eq!(oracle.occult.get() + kin.get(), 261);
        assert_eq!(oracle.analog, oracle.antipode);
        assert_eq!(kin_color(oracle.guide), kin_color(kin));
    }
}

#[test]
fn test_reading_bundles_everything() {
    let calendar = DreamspellCalendar::default();
    let reading = calendar.reading_for_str("2012-12-21").unwrap();
    let kin = reading.signature.kin;
    assert_eq!(reading.oracle, oracle_for(kin));
    assert_eq!(reading.harmonic_family.len(), 4);
    assert!(reading.harmonic_family.contains(&kin));
    assert_eq!(reading.color_family.len(), 5);

    let json = serde_json::to_value(&reading).unwrap();
    assert_eq!(json["signature"]["kin"], kin.get());
    assert!(json["wavespellFamily"].is_array());
}

#[test]
fn test_invalid_date_fails_fast() {
    let calendar = DreamspellCalendar::default();
    assert!(matches!(
        calendar.signature_for_str("1987-02-31"),
        Err(WavespellError::InvalidDate { .. })
    ));
    assert!(wavespell::signature_for("not a date").is_err());
}

#[test]
fn test_signature_round_trips_through_json() {
    let signature = wavespell::signature_for("1999-09-09").unwrap();
    let json = serde_json::to_string(&signature).unwrap();
    let back: GalacticSignature = serde_json::from_str(&json).unwrap();
    assert_eq!(back, signature);
}
