use super::CalendarRules;
use crate::utils::{floor_div, MS_PER_DAY};

/// Twelve months of 30 days followed by a thirteenth month of five days,
/// six in a leap year.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedMonth {
    /// Epoch day of 0001-01-01.
    epoch: i64,
    min_year: i64,
    max_year: i64,
}

const DAYS_PER_MONTH: i64 = 30;

impl FixedMonth {
    /// Epoch Julian 284-08-29.
    pub(crate) const COPTIC: Self = Self {
        epoch: -615_558,
        min_year: -292_269_337,
        max_year: 292_272_708,
    };

    /// Epoch Julian 8-08-29.
    pub(crate) const ETHIOPIC: Self = Self {
        epoch: -716_367,
        min_year: -292_269_337,
        max_year: 292_272_984,
    };
}

impl CalendarRules for FixedMonth {
    fn year_start_days(&self, year: i64) -> i64 {
        365 * (year - 1) + floor_div(year, 4) + self.epoch
    }

    fn days_from_ymd(&self, year: i64, month: i64, day: i64) -> i64 {
        self.year_start_days(year) + (month - 1) * DAYS_PER_MONTH + day - 1
    }

    fn ymd_from_days(&self, days: i64) -> (i64, i64, i64) {
        let mut year = floor_div((days - self.epoch) * 4, 1_461) + 1;
        while self.year_start_days(year) > days {
            year -= 1;
        }
        while self.year_start_days(year + 1) <= days {
            year += 1;
        }
        let doy = days - self.year_start_days(year);
        (year, doy / DAYS_PER_MONTH + 1, doy % DAYS_PER_MONTH + 1)
    }

    fn is_leap_year(&self, year: i64) -> bool {
        year.rem_euclid(4) == 3
    }

    fn days_in_year_month(&self, year: i64, month: i64) -> i64 {
        if month != 13 {
            return DAYS_PER_MONTH;
        }
        if self.is_leap_year(year) {
            6
        } else {
            5
        }
    }

    fn days_in_month_max(&self, month: i64) -> i64 {
        if month == 13 {
            6
        } else {
            DAYS_PER_MONTH
        }
    }

    fn leap_month(&self) -> i64 {
        13
    }

    fn months_in_year(&self) -> i64 {
        13
    }

    fn min_year(&self) -> i64 {
        self.min_year
    }

    fn max_year(&self) -> i64 {
        self.max_year
    }

    fn average_millis_per_year(&self) -> i64 {
        31_557_600_000
    }

    fn average_millis_per_month(&self) -> i64 {
        DAYS_PER_MONTH * MS_PER_DAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_has_six_epagomenal_days() {
        let coptic = FixedMonth::COPTIC;
        assert!(coptic.is_leap_year(1715));
        assert!(!coptic.is_leap_year(1716));
        assert_eq!(coptic.days_in_year(1715), 366);
        assert_eq!(coptic.days_in_year_month(1715, 13), 6);
        assert_eq!(coptic.days_in_year_month(1716, 13), 5);
        assert_eq!(
            coptic.year_start_days(1716) - coptic.year_start_days(1715),
            366
        );
    }

    #[test]
    fn epoch_day() {
        assert_eq!(FixedMonth::COPTIC.ymd_from_days(-615_558), (1, 1, 1));
        assert_eq!(FixedMonth::ETHIOPIC.ymd_from_days(-716_368), (0, 13, 5));
    }
}
