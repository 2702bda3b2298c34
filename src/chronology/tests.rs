use alloc::string::ToString;
use alloc::sync::Arc;
use alloc::vec;

use zone_provider::{LocalTimeRecord, Transition, UtcOffsetMillis, ZoneRules};

use super::Chronology;
use crate::{
    builtins::core::{Partial, Period, PeriodType},
    calendar::CalendarSystem,
    error::{ErrorKind, ErrorMessage},
    fields::DateTimeFieldType,
    TimeZone,
};

const HOUR: i64 = 3_600_000;
const DAY: i64 = 24 * HOUR;

fn spring_forward_zone() -> TimeZone {
    // New York, 2021-03-14T07:00Z.
    let est = LocalTimeRecord::standard(UtcOffsetMillis(-5 * HOUR as i32));
    let edt = LocalTimeRecord::daylight(UtcOffsetMillis(-4 * HOUR as i32));
    let transition = Transition {
        epoch_millis: 1_615_705_200_000,
        record: edt,
    };
    TimeZone::from_rules(Arc::new(
        ZoneRules::new("America/New_York", est, vec![transition]).unwrap(),
    ))
}

#[test]
fn identity_and_display() {
    let iso = Chronology::iso_utc();
    assert_eq!(iso, Chronology::default());
    assert_eq!(iso.to_string(), "iso8601[UTC]");
    let zoned = iso.with_zone(TimeZone::fixed(-5 * HOUR as i32).unwrap());
    assert_eq!(zoned.to_string(), "iso8601[-05:00]");
    assert_ne!(zoned, iso);
    assert_eq!(zoned.with_utc(), iso);
    let julian = Chronology::utc(CalendarSystem::Julian);
    assert_eq!(julian.calendar(), CalendarSystem::Julian);
    assert_eq!(julian.year().name(), "year");
}

#[test]
fn builds_instants_from_fields() {
    let iso = Chronology::iso_utc();
    assert_eq!(iso.date_time_millis(1970, 1, 2, 5).unwrap(), DAY + 5);
    assert_eq!(
        iso.date_time_millis_hms(2013, 1, 31, 10, 30, 15, 250).unwrap(),
        1_359_628_215_250
    );
    let err = iso.date_time_millis(2013, 2, 29, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FieldValue);
    assert!(iso.date_time_millis_hms(2013, 1, 1, 24, 0, 0, 0).is_err());
    assert!(iso.date_time_millis(2013, 1, 1, DAY as i32).is_err());

    let julian = Chronology::utc(CalendarSystem::Julian);
    assert_eq!(julian.date_time_millis(1969, 12, 19, 0).unwrap(), 0);
    assert!(julian.date_time_millis(0, 1, 1, 0).is_err());
}

#[test]
fn gaps_are_rejected_when_building_instants() {
    let chronology = Chronology::iso(spring_forward_zone());
    let err = chronology
        .date_time_millis_hms(2021, 3, 14, 2, 30, 0, 0)
        .unwrap_err();
    assert_eq!(err.message(), ErrorMessage::IllegalInstantInGap.to_str());
    assert_eq!(
        chronology.date_time_millis_hms(2021, 3, 14, 3, 0, 0, 0).unwrap(),
        1_615_705_200_000
    );
}

#[test]
fn validates_partial_values() {
    let iso = Chronology::iso_utc();
    let month_day = [DateTimeFieldType::MonthOfYear, DateTimeFieldType::DayOfMonth];
    assert!(iso.validate_fields(&month_day, &[2, 29]).is_ok());
    assert!(iso.validate_fields(&month_day, &[2, 30]).is_err());
    assert!(iso.validate_fields(&month_day, &[13, 1]).is_err());
    let err = iso.validate_fields(&month_day, &[2]).unwrap_err();
    assert_eq!(err.message(), ErrorMessage::ValuesLengthMismatch.to_str());

    let date = Partial::try_new(
        &[
            DateTimeFieldType::Year,
            DateTimeFieldType::MonthOfYear,
            DateTimeFieldType::DayOfMonth,
        ],
        &[2012, 2, 29],
        None,
    )
    .unwrap();
    assert!(iso.validate(&date, &[2013, 2, 29]).is_err());
    assert!(iso.validate(&date, &[2012, 2, 29]).is_ok());
    let instant = iso.set_partial(&date, 0).unwrap();
    assert_eq!(iso.get_partial(&date, instant), [2012, 2, 29]);
}

#[test]
fn splits_spans_into_period_values() {
    let iso = Chronology::iso_utc();
    let start = iso.date_time_millis(2013, 1, 31, 0).unwrap();
    let end = iso.date_time_millis(2013, 3, 30, 0).unwrap();
    assert_eq!(
        iso.period_values(PeriodType::standard(), start, end).unwrap(),
        [0, 1, 4, 2, 0, 0, 0, 0]
    );
    assert_eq!(
        iso.period_values(PeriodType::days(), start, end).unwrap(),
        [58]
    );
    // Backwards, the month lands on February 28th and the weeks reach
    // January 31st exactly.
    assert_eq!(
        iso.period_values(PeriodType::standard(), end, start).unwrap(),
        [0, -1, -4, 0, 0, 0, 0, 0]
    );
    assert_eq!(iso.period_values(PeriodType::time(), start, start).unwrap(), [0; 4]);
}

#[test]
fn splits_durations_into_precise_units() {
    let iso = Chronology::iso_utc();
    let duration = DAY + 2 * HOUR + 3 * 60_000;
    assert_eq!(
        iso.period_values_for_duration(PeriodType::day_time(), duration).unwrap(),
        [1, 2, 3, 0, 0]
    );
    assert_eq!(
        iso.period_values_for_duration(PeriodType::standard(), duration).unwrap(),
        [0, 0, 0, 1, 2, 3, 0, 0]
    );
    let zoned = Chronology::iso(spring_forward_zone());
    assert_eq!(
        zoned.period_values_for_duration(PeriodType::day_time(), duration).unwrap(),
        [0, 26, 3, 0, 0]
    );
}

#[test]
fn adds_periods_and_durations() {
    let iso = Chronology::iso_utc();
    let start = iso.date_time_millis(2013, 1, 31, 0).unwrap();
    let period = Period::new(0, 1, 4, 2, 0, 0, 0, 0);
    let end = iso.add_period(&period, start, 1).unwrap();
    assert_eq!(end, iso.date_time_millis(2013, 3, 30, 0).unwrap());
    assert_eq!(iso.add_period(&period, start, 0).unwrap(), start);
    let back = iso.add_period(&period, end, -1).unwrap();
    assert_eq!(back, iso.date_time_millis(2013, 1, 29, 0).unwrap());

    assert_eq!(iso.add_duration(start, HOUR, -2).unwrap(), start - 2 * HOUR);
    let err = iso.add_duration(i64::MAX, 1, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Arithmetic);
}
