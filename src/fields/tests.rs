use alloc::sync::Arc;
use alloc::vec;

use zone_provider::{LocalTimeRecord, Transition, UtcOffsetMillis, ZoneRules};

use super::{DateTimeFieldType, DurationFieldType};
use crate::{
    error::{ErrorKind, ErrorMessage},
    options::RoundingMode,
    Chronology, TimeZone,
};

const HOUR: i64 = 3_600_000;
const DAY: i64 = 24 * HOUR;
// 2013-01-31T10:30:15.250Z, a Thursday.
const SAMPLE: i64 = 1_359_628_215_250;
// 2013-01-31T10:30:00.000Z
const HALF_PAST_TEN: i64 = 1_359_628_200_000;
// 2021-03-14T07:00Z and 2021-11-07T06:00Z.
const SPRING: i64 = 1_615_705_200_000;
const FALL: i64 = 1_636_264_800_000;

fn new_york() -> TimeZone {
    let est = LocalTimeRecord::standard(UtcOffsetMillis(-5 * HOUR as i32));
    let edt = LocalTimeRecord::daylight(UtcOffsetMillis(-4 * HOUR as i32));
    let rules = ZoneRules::new(
        "America/New_York",
        est,
        vec![
            Transition {
                epoch_millis: SPRING,
                record: edt,
            },
            Transition {
                epoch_millis: FALL,
                record: est,
            },
        ],
    )
    .unwrap();
    TimeZone::from_rules(Arc::new(rules))
}

#[test]
fn reads_every_component() {
    let iso = Chronology::iso_utc();
    let expected = [
        (DateTimeFieldType::Era, 1),
        (DateTimeFieldType::YearOfEra, 2013),
        (DateTimeFieldType::CenturyOfEra, 20),
        (DateTimeFieldType::YearOfCentury, 13),
        (DateTimeFieldType::Year, 2013),
        (DateTimeFieldType::DayOfYear, 31),
        (DateTimeFieldType::MonthOfYear, 1),
        (DateTimeFieldType::DayOfMonth, 31),
        (DateTimeFieldType::Weekyear, 2013),
        (DateTimeFieldType::WeekOfWeekyear, 5),
        (DateTimeFieldType::DayOfWeek, 4),
        (DateTimeFieldType::HalfdayOfDay, 0),
        (DateTimeFieldType::HourOfHalfday, 10),
        (DateTimeFieldType::ClockhourOfHalfday, 10),
        (DateTimeFieldType::ClockhourOfDay, 10),
        (DateTimeFieldType::HourOfDay, 10),
        (DateTimeFieldType::MinuteOfDay, 630),
        (DateTimeFieldType::MinuteOfHour, 30),
        (DateTimeFieldType::SecondOfDay, 37_815),
        (DateTimeFieldType::SecondOfMinute, 15),
        (DateTimeFieldType::MillisOfDay, 37_815_250),
        (DateTimeFieldType::MillisOfSecond, 250),
    ];
    for (field_type, value) in expected {
        assert_eq!(iso.field(field_type).get(SAMPLE), value, "{field_type}");
    }
}

#[test]
fn set_clamps_the_day_of_month() {
    let iso = Chronology::iso_utc();
    let february = iso.month_of_year().set(SAMPLE, 2).unwrap();
    assert_eq!(february, SAMPLE + 28 * DAY);
    assert_eq!(iso.day_of_month().get(february), 28);
    assert_eq!(iso.month_of_year().add(SAMPLE, 1).unwrap(), february);

    let err = iso.month_of_year().set(SAMPLE, 13).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FieldValue);
    let details = err.field_details().unwrap();
    assert_eq!((details.lower, details.upper), (Some(1), Some(12)));
}

#[test]
fn set_then_get_round_trips() {
    let iso = Chronology::iso_utc();
    for (field_type, value) in [
        (DateTimeFieldType::Year, 1999),
        (DateTimeFieldType::DayOfYear, 200),
        (DateTimeFieldType::WeekOfWeekyear, 52),
        (DateTimeFieldType::DayOfWeek, 7),
        (DateTimeFieldType::ClockhourOfDay, 24),
        (DateTimeFieldType::MinuteOfDay, 0),
    ] {
        let field = iso.field(field_type);
        assert_eq!(field.get(field.set(SAMPLE, value).unwrap()), value, "{field_type}");
    }
}

#[test]
fn bounds_depend_on_context() {
    let iso = Chronology::iso_utc();
    let day = iso.day_of_month();
    assert_eq!((day.minimum_value(), day.maximum_value()), (1, 31));
    // 2012-02-15
    let leap_february = 15_385 * DAY;
    assert_eq!(day.maximum_value_at(leap_february), 29);
    assert!(iso.year().is_leap(leap_february));
    assert_eq!(iso.year().leap_amount(SAMPLE), 0);

    let month_only = [DateTimeFieldType::MonthOfYear, DateTimeFieldType::DayOfMonth];
    assert_eq!(day.maximum_value_for_partial(&month_only, &[2, 1]), 29);
    let with_year = [
        DateTimeFieldType::Year,
        DateTimeFieldType::MonthOfYear,
        DateTimeFieldType::DayOfMonth,
    ];
    assert_eq!(day.maximum_value_for_partial(&with_year, &[2013, 2, 1]), 28);
}

#[test]
fn wrapping_stays_inside_the_field() {
    let iso = Chronology::iso_utc();
    let ten_fifty_nine = HALF_PAST_TEN + 29 * 60_000;
    let wrapped = iso.minute_of_hour().add_wrap_field(ten_fifty_nine, 2).unwrap();
    assert_eq!(iso.minute_of_hour().get(wrapped), 1);
    assert_eq!(iso.hour_of_day().get(wrapped), 10);
    let carried = iso.minute_of_hour().add(ten_fifty_nine, 2).unwrap();
    assert_eq!(iso.hour_of_day().get(carried), 11);
}

#[test]
fn rounding_modes() {
    let iso = Chronology::iso_utc();
    let day = iso.day_of_month();
    let midnight = HALF_PAST_TEN - 10 * HOUR - 30 * 60_000;
    assert_eq!(day.round_floor(SAMPLE).unwrap(), midnight);
    assert_eq!(day.round_ceiling(SAMPLE).unwrap(), midnight + DAY);
    assert_eq!(day.round_ceiling(midnight).unwrap(), midnight);
    assert_eq!(day.round_half_floor(SAMPLE).unwrap(), midnight);
    assert_eq!(day.remainder(SAMPLE).unwrap(), SAMPLE - midnight);

    let hour = iso.hour_of_day();
    assert_eq!(hour.round_half_floor(HALF_PAST_TEN).unwrap(), HALF_PAST_TEN - 30 * 60_000);
    assert_eq!(hour.round_half_ceiling(HALF_PAST_TEN).unwrap(), HALF_PAST_TEN + 30 * 60_000);
    // Ties go to the even hour: 10 for 10:30, 12 for 11:30.
    assert_eq!(hour.round_half_even(HALF_PAST_TEN).unwrap(), HALF_PAST_TEN - 30 * 60_000);
    let half_past_eleven = HALF_PAST_TEN + HOUR;
    assert_eq!(
        hour.round(half_past_eleven, RoundingMode::HalfEven).unwrap(),
        half_past_eleven + 30 * 60_000
    );

    // Noon on the 31st is a tie between two odd days and moves up to the
    // 1st; noon on the 30th stays.
    let noon = HALF_PAST_TEN + HOUR + 30 * 60_000;
    assert_eq!(day.round_half_even(noon).unwrap(), midnight + DAY);
    assert_eq!(day.get(day.round_half_even(noon).unwrap()), 1);
    assert_eq!(day.round_half_even(noon - DAY).unwrap(), midnight - DAY);
}

#[test]
fn duration_fields() {
    let iso = Chronology::iso_utc();
    assert_eq!(iso.hours().unit_millis(), HOUR);
    assert!(iso.days().is_precise());
    assert!(!iso.months().is_precise());
    assert!(iso.months().unit_millis() > 28 * DAY);
    assert_eq!(iso.days().value(DAY + HOUR).unwrap(), 1);
    assert_eq!(iso.hours().value_as_long(-HOUR * 3 / 2).unwrap(), -1);
    assert_eq!(iso.weeks().millis_for(2).unwrap(), 14 * DAY);
    assert_eq!(iso.months().millis_for_at(1, SAMPLE - 30 * DAY).unwrap(), 31 * DAY);

    for (unit, amount) in [
        (DurationFieldType::Years, 7),
        (DurationFieldType::Months, -13),
        (DurationFieldType::Weeks, 3),
        (DurationFieldType::Hours, -49),
    ] {
        let field = iso.duration_field(unit);
        let moved = field.add(SAMPLE, amount).unwrap();
        assert_eq!(field.difference_as_long(moved, SAMPLE).unwrap(), amount, "{unit}");
    }

    let err = iso.eras().add(SAMPLE, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);
    assert_eq!(err.message(), ErrorMessage::ErasUnsupported.to_str());
    assert!(!iso.eras().is_supported());
}

#[test]
fn zoned_days_keep_the_wall_clock() {
    let chronology = Chronology::iso(new_york());
    // 2021-03-13T12:00 EST
    let noon = 1_615_654_800_000;
    let next_noon = chronology.days().add(noon, 1).unwrap();
    assert_eq!(next_noon - noon, 23 * HOUR);
    assert_eq!(chronology.hour_of_day().get(next_noon), 12);
    assert_eq!(chronology.days().difference(next_noon, noon).unwrap(), 1);

    let day_later = chronology.hours().add(noon, 24).unwrap();
    assert_eq!(day_later - noon, 24 * HOUR);
    assert_eq!(chronology.hour_of_day().get(day_later), 13);

    assert!(!chronology.days().is_precise());
    assert!(chronology.hours().is_precise());
    assert_eq!(chronology.hour_of_day().get(SPRING), 3);
}

#[test]
fn zoned_days_differ_across_a_gap() {
    let chronology = Chronology::iso(new_york());
    let days = chronology.days();
    // 2021-03-15T02:30 EDT back one day lands in the skipped hour and is
    // shifted to 03:30 EDT.
    let start = SPRING + 23 * HOUR + HOUR / 2;
    let moved = days.add(start, -1).unwrap();
    assert_eq!(moved, SPRING + HOUR / 2);
    assert_eq!(start - moved, 23 * HOUR);
    assert_eq!(days.difference(moved, start).unwrap(), -1);
    // Forward, 23 hours from 03:30 to 02:30 is short of a day.
    assert_eq!(days.difference(start, moved).unwrap(), 0);

    // 2021-03-13T02:30 EST forward one day lands in the same hour.
    let before = SPRING - 24 * HOUR + HOUR / 2;
    let forward = days.add(before, 1).unwrap();
    assert_eq!(forward, SPRING + HOUR / 2);
    assert_eq!(days.difference(forward, before).unwrap(), 1);
    assert_eq!(days.difference(forward - 1, before).unwrap(), 0);
}

#[test]
fn setting_into_a_gap_is_rejected() {
    let chronology = Chronology::iso(new_york());
    // 2021-03-14T12:00 EDT
    let noon = 1_615_737_600_000;
    let err = chronology.hour_of_day().set(noon, 2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);
    assert_eq!(err.message(), ErrorMessage::IllegalInstantInGap.to_str());
    let three = chronology.hour_of_day().set(noon, 3).unwrap();
    assert_eq!(three, SPRING);
}
