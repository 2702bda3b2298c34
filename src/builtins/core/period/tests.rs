use alloc::string::ToString;
use alloc::vec::Vec;

use super::Period;
use crate::{
    builtins::core::{DateTime, LocalDate, Partial, PeriodType},
    error::{ErrorKind, ErrorMessage},
    fields::{DateTimeFieldType, DurationFieldType},
    Chronology,
};

fn date(year: i32, month: i32, day: i32) -> DateTime {
    DateTime::from_ymd_hms(year, month, day, 0, 0, 0, 0, Chronology::iso_utc()).unwrap()
}

#[test]
fn between_date_times() {
    let period = Period::between(&date(2013, 1, 31), &date(2013, 3, 30), None).unwrap();
    assert_eq!((period.months(), period.weeks(), period.days()), (1, 4, 2));
    assert_eq!(period.to_string(), "P1M4W2D");

    let days = Period::between(&date(2013, 1, 31), &date(2013, 3, 30), Some(PeriodType::days()))
        .unwrap();
    assert_eq!(days.days(), 58);
    assert_eq!(days.size(), 1);
    assert_eq!(days.value(0), Some(58));
    assert_eq!(days.value(1), None);

    // A leap day start counts a whole year at the end of the next February.
    let leap = Period::between(&date(2012, 2, 29), &date(2013, 2, 28), None).unwrap();
    assert_eq!(leap.to_string(), "P1Y");
}

#[test]
fn between_partials() {
    let start = LocalDate::try_new(2013, 1, 31, None).unwrap();
    let end = LocalDate::try_new(2014, 2, 28, None).unwrap();
    let period = Period::between_partials(&start, &end, Some(PeriodType::year_month_day()));
    assert_eq!(period.unwrap().to_string(), "P1Y1M");

    let month_day = |month, day| {
        Partial::try_new(
            &[DateTimeFieldType::MonthOfYear, DateTimeFieldType::DayOfMonth],
            &[month, day],
            None,
        )
        .unwrap()
    };
    let period = Period::between_partials(&month_day(2, 1), &month_day(3, 15), None).unwrap();
    assert_eq!(period.to_string(), "P1M2W");
    // The leap day needs a leap year underneath.
    let period = Period::between_partials(&month_day(2, 29), &month_day(3, 1), None).unwrap();
    assert_eq!(period.to_string(), "P1D");
    let period = Period::between_partials(&month_day(1, 31), &month_day(2, 29), None).unwrap();
    assert_eq!(period.to_string(), "P1M");

    let year_day = Partial::try_new(
        &[DateTimeFieldType::Year, DateTimeFieldType::DayOfMonth],
        &[2013, 1],
        None,
    )
    .unwrap();
    assert!(Period::between_partials(&year_day, &year_day, None).is_err());
    assert!(Period::between_partials(&start, &month_day(2, 1), None).is_err());
}

#[test]
fn addition_is_per_unit() {
    let a = Period::new_time(2, 30, 0, 0);
    let b = Period::from_minutes(40);
    let sum = a.plus(&b).unwrap();
    assert_eq!((sum.hours(), sum.minutes()), (2, 70));
    assert_eq!(sum.minus(&b).unwrap(), a);
    assert_eq!(sum.to_string(), "PT2H70M");
    assert_eq!(a.multiplied_by(3).unwrap().to_string(), "PT6H90M");
    assert_eq!(a.negated().unwrap().to_string(), "PT-2H-30M");
    assert_eq!(a.plus_days(1).unwrap().minus_hours(3).unwrap().to_string(), "P1DT-1H30M");
    assert_eq!(a.with_field(DurationFieldType::Seconds, 5).unwrap().seconds(), 5);
    assert_eq!(a.get(DurationFieldType::Minutes), 30);
    assert_eq!(a.get(DurationFieldType::Centuries), 0);
    assert!(a.with_field(DurationFieldType::Centuries, 1).is_err());
    let longer = a.plus(&Period::new_time(3, 40, 0, 0)).unwrap();
    assert_eq!((longer.hours(), longer.minutes()), (5, 70));
    assert_eq!(longer.to_string(), "PT5H70M");
    let max = Period::from_years(i32::MAX);
    assert_eq!(max.plus_years(1).unwrap_err().kind(), ErrorKind::Arithmetic);
}

#[test]
fn narrower_types_reject_missing_units() {
    let days_only =
        Period::try_new_with_type([0, 0, 0, 3, 0, 0, 0, 0], PeriodType::days()).unwrap();
    assert_eq!(days_only.to_string(), "P3D");
    assert!(days_only.is_supported(DurationFieldType::Days));
    assert!(!days_only.is_supported(DurationFieldType::Hours));

    let err = days_only.plus_hours(1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);
    assert_eq!(days_only.plus_hours(0).unwrap(), days_only);
    let err = days_only.with_hours(0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);
    assert!(days_only.with_hours(1).is_err());
    assert!(days_only.with_field(DurationFieldType::Hours, 0).is_err());

    let err = Period::from_hours(1).with_period_type(PeriodType::days()).unwrap_err();
    assert_eq!(err.message(), ErrorMessage::PeriodTypeMismatch.to_str());
    let widened = days_only.with_period_type(PeriodType::standard()).unwrap();
    assert_eq!(widened, Period::from_days(3));
    assert_eq!(
        Period::try_new_with_type([0; 8], PeriodType::hours()).unwrap().to_string(),
        "PT0H"
    );
}

#[test]
fn standard_conversions() {
    let period = Period::new(0, 0, 1, 1, 1, 1, 1, 1);
    assert_eq!(period.to_standard_weeks().unwrap(), 1);
    assert_eq!(period.to_standard_days().unwrap(), 8);
    assert_eq!(period.to_standard_hours().unwrap(), 193);
    assert_eq!(period.to_standard_minutes().unwrap(), 11_581);
    assert_eq!(period.to_standard_seconds().unwrap(), 694_861);
    assert_eq!(period.to_standard_duration().unwrap().millis(), 694_861_001);

    // Smaller units are summed before truncating.
    let under_a_minute = Period::new_time(0, 0, 30, 600).plus_seconds(29).unwrap();
    assert_eq!(under_a_minute.to_standard_minutes().unwrap(), 0);
    assert_eq!(Period::new_time(0, 0, 59, 1_000).to_standard_minutes().unwrap(), 1);

    let err = Period::from_months(1).to_standard_days().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);
    assert!(Period::from_years(1).to_standard_duration().is_err());
}

#[test]
fn normalization() {
    let period = Period::from_minutes(75).normalized_standard(None).unwrap();
    assert_eq!((period.hours(), period.minutes()), (1, 15));
    assert_eq!(period.to_string(), "PT1H15M");

    let months = Period::new(1, 15, 0, 0, 0, 0, 0, 0);
    assert_eq!(months.normalized_standard(None).unwrap().to_string(), "P2Y3M");
    let no_years = months
        .normalized_standard(Some(PeriodType::standard().with_years_removed()))
        .unwrap();
    assert_eq!(no_years.months(), 27);
    let err = months
        .normalized_standard(Some(PeriodType::day_time()))
        .unwrap_err();
    assert_eq!(err.message(), ErrorMessage::NormalizeMissingYearsOrMonths.to_str());

    let weeks = Period::from_days(15).normalized_standard(None).unwrap();
    assert_eq!(weeks.to_string(), "P2W1D");
    let days = Period::from_weeks(2)
        .normalized_standard(Some(PeriodType::day_time()))
        .unwrap();
    assert_eq!(days.days(), 14);
}

#[test]
fn iso_text() {
    assert_eq!(Period::new(1, 2, 3, 4, 5, 6, 7, 8).to_string(), "P1Y2M3W4DT5H6M7.008S");
    assert_eq!(Period::zero().to_string(), "PT0S");
    assert_eq!(Period::from_millis(-1_500).to_string(), "PT-1.500S");
    assert_eq!(Period::from_seconds(1).minus_millis(1_500).unwrap().to_string(), "PT-0.500S");
    let empty_days = Period::try_new_with_type([0; 8], PeriodType::year_month_day()).unwrap();
    assert_eq!(empty_days.to_string(), "P0D");
}

#[test]
fn iteration_follows_the_type() {
    let period =
        Period::try_new_with_type([1, 0, 0, 2, 0, 0, 0, 0], PeriodType::year_day()).unwrap();
    let units: Vec<_> = period.iter().collect();
    assert_eq!(units, [(DurationFieldType::Years, 1), (DurationFieldType::Days, 2)]);
    assert_eq!(period.field_type(1), Some(DurationFieldType::Days));
    assert!(!period.is_zero());
}
