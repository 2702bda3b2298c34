use alloc::string::ToString;

use super::Duration;
use crate::{
    builtins::core::{DateTime, PeriodType},
    error::{ErrorKind, ErrorMessage},
    options::RoundingMode,
    Chronology, TimeZone,
};

const HOUR: i64 = 3_600_000;
const DAY: i64 = 24 * HOUR;

#[test]
fn standard_units() {
    let duration = Duration::from_standard_days(2).unwrap();
    assert_eq!(duration.millis(), 2 * DAY);
    assert_eq!(duration.standard_hours(), 48);
    assert_eq!(Duration::from_standard_hours(-3).unwrap().standard_days(), 0);
    assert_eq!(Duration::from_standard_minutes(90).unwrap().standard_hours(), 1);
    assert_eq!(Duration::from_standard_seconds(-61).unwrap().standard_minutes(), -1);
    assert!(Duration::from_standard_days(i64::MAX / 1000).is_err());
    assert_eq!(Duration::between(10, 4).unwrap().millis(), -6);
}

#[test]
fn overflow_is_an_arithmetic_error() {
    let max = Duration::from_millis(i64::MAX);
    let err = max.plus_millis(1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Arithmetic);
    assert!(max.plus(Duration::from_millis(1)).is_err());
    assert!(Duration::from_millis(i64::MIN).negated().is_err());
    assert!(Duration::from_millis(i64::MIN).abs().is_err());
    assert!(max.multiplied_by(2).is_err());
    assert!(Duration::from_millis(i64::MIN).divided_by(-1).is_err());
}

#[test]
fn arithmetic() {
    let duration = Duration::from_millis(1_500);
    assert_eq!(duration.minus_millis(2_000).unwrap().millis(), -500);
    assert_eq!(duration.multiplied_by(-2).unwrap().millis(), -3_000);
    assert_eq!(duration.divided_by(4).unwrap().millis(), 375);
    assert_eq!(Duration::from_millis(-7).divided_by(2).unwrap().millis(), -3);
    assert_eq!(Duration::from_millis(-7).abs().unwrap().millis(), 7);
    assert!(duration.is_longer_than(Duration::ZERO));
    assert!(duration.negated().unwrap().is_shorter_than(Duration::ZERO));
    assert_eq!(duration.with_millis(3).millis(), 3);
    assert!(Duration::ZERO.is_zero());
    assert_eq!(i64::from(duration), 1_500);
}

#[test]
fn rounded_division() {
    let seven = Duration::from_millis(7);
    assert_eq!(seven.divided_by_rounded(2, RoundingMode::Floor).unwrap().millis(), 3);
    assert_eq!(seven.divided_by_rounded(2, RoundingMode::Ceiling).unwrap().millis(), 4);
    assert_eq!(seven.divided_by_rounded(2, RoundingMode::HalfEven).unwrap().millis(), 4);
    let minus_five = Duration::from_millis(-5);
    assert_eq!(minus_five.divided_by_rounded(2, RoundingMode::HalfFloor).unwrap().millis(), -3);
    assert_eq!(minus_five.divided_by_rounded(2, RoundingMode::HalfCeiling).unwrap().millis(), -2);
    let err = seven.divided_by_rounded(0, RoundingMode::Floor).unwrap_err();
    assert_eq!(err.message(), ErrorMessage::DivisionByZero.to_str());
    assert!(seven.divided_by(0).is_err());
}

#[test]
fn iso_text() {
    assert_eq!(Duration::from_millis(1_500).to_string(), "PT1.500S");
    assert_eq!(Duration::from_millis(60_000).to_string(), "PT60S");
    assert_eq!(Duration::from_millis(-500).to_string(), "PT-0.500S");
    assert_eq!(Duration::ZERO.to_string(), "PT0S");

    assert_eq!("PT1.5S".parse::<Duration>().unwrap().millis(), 1_500);
    assert_eq!("PT-0.500S".parse::<Duration>().unwrap().millis(), -500);
    assert_eq!("PT72S".parse::<Duration>().unwrap().millis(), 72_000);
    for invalid in ["P1D", "PT1.S", "PT.5S", "PT1.0001S", "PTS", "PT1,5S"] {
        assert!(invalid.parse::<Duration>().is_err(), "{invalid}");
    }
}

#[test]
fn periods_from_durations() {
    let duration = Duration::from_millis(DAY + HOUR + 60_000 + 1_001);
    assert_eq!(duration.to_period(None, None).unwrap().to_string(), "P1DT1H1M1.001S");
    let time_only = duration.to_period(Some(PeriodType::time()), None).unwrap();
    assert_eq!(time_only.hours(), 25);

    // Months are imprecise, so the whole span is counted from a start.
    let start = DateTime::from_ymd_hms(2013, 1, 31, 0, 0, 0, 0, Chronology::iso_utc()).unwrap();
    let span = Duration::from_standard_days(58).unwrap();
    let period = span.to_period_from(&start, None).unwrap();
    assert_eq!(period.to_string(), "P1M4W2D");

    let zoned = Chronology::iso(TimeZone::fixed(HOUR as i32).unwrap());
    let period = Duration::from_standard_days(8).unwrap();
    let period = period.to_period(Some(PeriodType::year_week_day()), Some(&zoned)).unwrap();
    assert_eq!((period.weeks(), period.days()), (1, 1));
}
