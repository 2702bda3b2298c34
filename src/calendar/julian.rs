use super::CalendarRules;
use crate::utils::floor_div;

/// Proleptic Julian rules over internal years, where year 0 is 1 BC.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Julian;

const DAYS_PER_4_YEARS: i64 = 1_461;
// Days from Julian 0000-03-01 to 1970-01-01 Gregorian.
const EPOCH_OFFSET: i64 = 719_470;

impl CalendarRules for Julian {
    fn days_from_ymd(&self, year: i64, month: i64, day: i64) -> i64 {
        let y = if month <= 2 { year - 1 } else { year };
        let era = floor_div(y, 4);
        let yoe = y - era * 4;
        let mp = if month > 2 { month - 3 } else { month + 9 };
        let doy = (153 * mp + 2) / 5 + day - 1;
        era * DAYS_PER_4_YEARS + yoe * 365 + doy - EPOCH_OFFSET
    }

    fn ymd_from_days(&self, days: i64) -> (i64, i64, i64) {
        let z = days + EPOCH_OFFSET;
        let era = floor_div(z, DAYS_PER_4_YEARS);
        let doe = z - era * DAYS_PER_4_YEARS;
        let yoe = (doe - doe / 1_460) / 365;
        let doy = doe - 365 * yoe;
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = yoe + era * 4 + i64::from(month <= 2);
        (year, month, day)
    }

    fn is_leap_year(&self, year: i64) -> bool {
        year.rem_euclid(4) == 0
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
        -292_269_053
    }

    fn max_year(&self) -> i64 {
        292_272_992
    }

    fn average_millis_per_year(&self) -> i64 {
        31_557_600_000
    }

    fn average_millis_per_month(&self) -> i64 {
        2_629_800_000
    }

    fn balances_leap_day(&self) -> bool {
        true
    }
}
