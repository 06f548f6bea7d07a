use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat};
use daystep_calendar::{CalendarError, Doy, Instant, civil_to_days, days_to_civil};

#[test]
fn days_to_civil_matches_chrono_across_five_eras() {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).expect("valid date");
    for days in (-400_000_i64..400_000).step_by(13) {
        let expected = epoch + chrono::TimeDelta::days(days);
        let (y, m, d) = days_to_civil(days);
        assert_eq!(
            (y, m, d),
            (
                i64::from(expected.year()),
                expected.month() as u8,
                expected.day() as u8
            ),
            "days_to_civil({days}) disagrees with chrono ({expected})"
        );
    }
}

#[test]
fn civil_to_days_matches_chrono() {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).expect("valid date");
    let cases: &[(i32, u32, u32)] = &[
        (1600, 3, 1),
        (1900, 2, 28),
        (1970, 1, 1),
        (2000, 2, 29),
        (2038, 1, 19),
        (2370, 12, 31),
        (2371, 1, 1),
    ];
    for &(y, m, d) in cases {
        let date = NaiveDate::from_ymd_opt(y, m, d).expect("valid date");
        let expected = (date - epoch).num_days();
        assert_eq!(
            civil_to_days(i64::from(y), m as u8, d as u8).unwrap(),
            expected,
            "civil_to_days({y}, {m}, {d})"
        );
    }
}

#[test]
fn rfc3339_matches_chrono_with_full_fraction() {
    // chrono always prints nine fraction digits with SecondsFormat::Nanos, so
    // only compare instants whose fraction has no trailing zero.
    for secs in (-5_000_000_000_i64..15_000_000_000).step_by(86_400 * 97 + 3_601) {
        let ours = Instant::from_unix(secs, 12_345_678).unwrap();
        let theirs = DateTime::from_timestamp(secs, 12_345_678).expect("in chrono range");
        assert_eq!(
            ours.to_rfc3339_nanos(),
            theirs.to_rfc3339_opts(SecondsFormat::Nanos, true),
            "rendering of {secs}s"
        );
    }
}

#[test]
fn doy_and_weekday_match_chrono() {
    for days in (0_i64..146_097).step_by(11) {
        let ours = Instant::from_unix(days * 86_400, 0).unwrap().civil();
        let theirs = DateTime::from_timestamp(days * 86_400, 0).expect("in chrono range");
        assert_eq!(u32::from(ours.doy().get()), theirs.ordinal(), "doy at day {days}");
        assert_eq!(
            &ours.weekday().name()[..3],
            format!("{:?}", theirs.weekday()),
            "weekday at day {days}"
        );
    }
}

#[test]
fn feb_29_only_in_leap_years() {
    assert!(Doy::from_ymd(2000, 2, 29).is_ok());
    assert!(Doy::from_ymd(2024, 2, 29).is_ok());
    assert_eq!(
        Doy::from_ymd(1900, 2, 29).unwrap_err(),
        CalendarError::InvalidDay {
            day: 29,
            month: 2,
            year: 1900,
            max_day: 28,
        }
    );
    assert!(Instant::from_civil(2100, 2, 29).is_err());
}
