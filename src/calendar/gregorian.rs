use super::CalendarRules;
use crate::utils::floor_div;

/// Proleptic Gregorian rules.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Gregorian;

const DAYS_PER_400_YEARS: i64 = 146_097;
// Days from 0000-03-01 to 1970-01-01.
const EPOCH_OFFSET: i64 = 719_468;

impl CalendarRules for Gregorian {
    fn days_from_ymd(&self, year: i64, month: i64, day: i64) -> i64 {
        let y = if month <= 2 { year - 1 } else { year };
        let era = floor_div(y, 400);
        let yoe = y - era * 400;
        let mp = if month > 2 { month - 3 } else { month + 9 };
        let doy = (153 * mp + 2) / 5 + day - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * DAYS_PER_400_YEARS + doe - EPOCH_OFFSET
    }

    fn ymd_from_days(&self, days: i64) -> (i64, i64, i64) {
        let z = days + EPOCH_OFFSET;
        let era = floor_div(z, DAYS_PER_400_YEARS);
        let doe = z - era * DAYS_PER_400_YEARS;
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = yoe + era * 400 + i64::from(month <= 2);
        (year, month, day)
    }

    fn is_leap_year(&self, year: i64) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    fn days_in_year_month(&self, year: i64, month: i64) -> i64 {
        if month == 2 {
            return if self.is_leap_year(year) { 29 } else { 28 };
        }
        self.days_in_month_max(month)
    }

    fn days_in_month_max(&self, month: i64) -> i64 {
        match month {
            2 => 29,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    fn leap_month(&self) -> i64 {
        2
    }

    fn months_in_year(&self) -> i64 {
        12
    }

    fn min_year(&self) -> i64 {
        -292_275_054
    }

    fn max_year(&self) -> i64 {
        292_278_993
    }

    fn average_millis_per_year(&self) -> i64 {
        31_556_952_000
    }

    fn average_millis_per_month(&self) -> i64 {
        2_629_746_000
    }

    fn balances_leap_day(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(Gregorian.is_leap_year(2000));
        assert!(Gregorian.is_leap_year(2024));
        assert!(!Gregorian.is_leap_year(1900));
        assert!(Gregorian.is_leap_year(0));
        assert!(Gregorian.is_leap_year(-4));
        assert!(!Gregorian.is_leap_year(-100));
    }

    #[test]
    fn known_dates() {
        assert_eq!(Gregorian.days_from_ymd(2000, 3, 1), 11_017);
        assert_eq!(Gregorian.days_from_ymd(1969, 12, 31), -1);
        assert_eq!(Gregorian.ymd_from_days(-719_528), (0, 1, 1));
        assert_eq!(Gregorian.days_in_year_month(2023, 2), 28);
        assert_eq!(Gregorian.days_in_year(2024), 366);
    }
}
