//! Text printing and parsing hooks.
//!
//! Locale aware formatting lives outside of this crate. Value types accept
//! any [`DateTimePrinter`] or [`DateTimeParser`] and delegate to it; the
//! [`IsoFormat`] implementation covers the ISO-8601 extended form used by
//! `Display`.

use core::fmt::{self, Write as _};

use crate::{
    builtins::core::ReadablePartial,
    fields::DateTimeFieldType,
    timezone::format_offset,
    ChronoError, ChronoResult, Chronology,
};

/// Writes instants and partials as text.
pub trait DateTimePrinter {
    /// Writes an instant as read on the wall clock of `chronology`.
    fn print_instant(
        &self,
        out: &mut dyn fmt::Write,
        millis: i64,
        chronology: &Chronology,
    ) -> fmt::Result;

    /// Writes the fields of a partial.
    fn print_partial(&self, out: &mut dyn fmt::Write, partial: &dyn ReadablePartial) -> fmt::Result;
}

/// Reads instants from text.
pub trait DateTimeParser {
    /// Parses an instant, resolving wall clock text in the zone of
    /// `chronology` unless the text carries its own offset.
    fn parse_millis(&self, text: &str, chronology: &Chronology) -> ChronoResult<i64>;

    /// Parses a wall clock reading as local milliseconds, ignoring any
    /// offset in the text.
    fn parse_local_millis(&self, text: &str, chronology: &Chronology) -> ChronoResult<i64> {
        self.parse_millis(text, &chronology.with_utc())
    }
}

/// The ISO-8601 extended format: `2013-01-31T10:20:30.400+01:00`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IsoFormat;

impl IsoFormat {
    fn write_date(out: &mut dyn fmt::Write, year: i32, month: i32, day: i32) -> fmt::Result {
        if year < 0 {
            write!(out, "-{:04}-{month:02}-{day:02}", year.unsigned_abs())
        } else {
            write!(out, "{year:04}-{month:02}-{day:02}")
        }
    }

    fn write_time(out: &mut dyn fmt::Write, millis_of_day: i32) -> fmt::Result {
        let hour = millis_of_day / 3_600_000;
        let minute = millis_of_day / 60_000 % 60;
        let second = millis_of_day / 1_000 % 60;
        let millis = millis_of_day % 1_000;
        write!(out, "{hour:02}:{minute:02}:{second:02}.{millis:03}")
    }
}

impl DateTimePrinter for IsoFormat {
    fn print_instant(
        &self,
        out: &mut dyn fmt::Write,
        millis: i64,
        chronology: &Chronology,
    ) -> fmt::Result {
        let offset = chronology.zone().offset_at(millis);
        let local = millis.checked_add(offset).ok_or(fmt::Error)?;
        let utc = chronology.with_utc();
        Self::write_date(
            out,
            utc.year().get(local),
            utc.month_of_year().get(local),
            utc.day_of_month().get(local),
        )?;
        out.write_char('T')?;
        Self::write_time(out, utc.millis_of_day().get(local))?;
        if offset == 0 {
            out.write_char('Z')
        } else {
            out.write_str(&format_offset(offset as i32))
        }
    }

    fn print_partial(
        &self,
        out: &mut dyn fmt::Write,
        partial: &dyn ReadablePartial,
    ) -> fmt::Result {
        use DateTimeFieldType as F;
        let date = [F::Year, F::MonthOfYear, F::DayOfMonth].map(|t| partial.get(t).ok());
        let time = [F::HourOfDay, F::MinuteOfHour, F::SecondOfMinute, F::MillisOfSecond]
            .map(|t| partial.get(t).ok());
        let millis_of_day = partial.get(F::MillisOfDay).ok().or(match time {
            [Some(h), Some(m), Some(s), Some(ms)] => {
                Some(h * 3_600_000 + m * 60_000 + s * 1_000 + ms)
            }
            _ => None,
        });
        let date = match date {
            [Some(y), Some(m), Some(d)] => Some((y, m, d)),
            _ => None,
        };
        match (date, millis_of_day) {
            (Some((y, m, d)), Some(time)) => {
                Self::write_date(out, y, m, d)?;
                out.write_char('T')?;
                Self::write_time(out, time)
            }
            (Some((y, m, d)), None) => Self::write_date(out, y, m, d),
            (None, Some(time)) => Self::write_time(out, time),
            (None, None) => {
                out.write_char('[')?;
                let values = partial.values();
                let fields = partial.field_types().iter().zip(values);
                for (i, (field_type, value)) in fields.enumerate() {
                    if i > 0 {
                        out.write_str(", ")?;
                    }
                    write!(out, "{field_type}={value}")?;
                }
                out.write_char(']')
            }
        }
    }
}

impl DateTimeParser for IsoFormat {
    fn parse_millis(&self, text: &str, chronology: &Chronology) -> ChronoResult<i64> {
        let mut cursor = Cursor::new(text);
        let local = cursor.date_time(chronology)?;
        let offset = cursor.offset()?;
        cursor.finish()?;
        match offset {
            Some(offset) => crate::utils::checked_sub(local, i64::from(offset)),
            None => chronology.zone().local_to_utc_strict(local),
        }
    }

    fn parse_local_millis(&self, text: &str, chronology: &Chronology) -> ChronoResult<i64> {
        let mut cursor = Cursor::new(text);
        let local = if text.len() > 2 && text.as_bytes()[2] == b':' {
            cursor.time(0)?
        } else {
            cursor.date_time(chronology)?
        };
        let _ = cursor.offset()?;
        cursor.finish()?;
        Ok(local)
    }
}

// ==== ISO parsing ====

struct Cursor<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn error(&self) -> ChronoError {
        ChronoError::argument().with_message(alloc::format!(
            "invalid ISO-8601 text at position {}: {}",
            self.pos,
            self.text
        ))
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            return true;
        }
        false
    }

    fn expect(&mut self, byte: u8) -> ChronoResult<()> {
        if self.eat(byte) {
            return Ok(());
        }
        Err(self.error())
    }

    /// Reads between `min` and `max` digits.
    fn digits(&mut self, min: usize, max: usize) -> ChronoResult<i32> {
        let start = self.pos;
        let mut value: i32 = 0;
        while self.pos - start < max {
            let Some(digit) = self.peek().filter(u8::is_ascii_digit) else {
                break;
            };
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(i32::from(digit - b'0')))
                .ok_or_else(|| self.error())?;
            self.pos += 1;
        }
        if self.pos - start < min {
            return Err(self.error());
        }
        Ok(value)
    }

    fn date_time(&mut self, chronology: &Chronology) -> ChronoResult<i64> {
        let utc = chronology.with_utc();
        let negative = self.eat(b'-');
        if !negative {
            let _ = self.eat(b'+');
        }
        let year = self.digits(4, 9)?;
        let year = if negative { -year } else { year };
        self.expect(b'-')?;
        let month = self.digits(2, 2)?;
        self.expect(b'-')?;
        let day = self.digits(2, 2)?;
        let date = utc.local_date_millis(year, month, day, 0)?;
        if self.eat(b'T') {
            return self.time(date);
        }
        Ok(date)
    }

    fn time(&mut self, date: i64) -> ChronoResult<i64> {
        let hour = self.digits(2, 2)?;
        self.expect(b':')?;
        let minute = self.digits(2, 2)?;
        let mut second = 0;
        let mut millis = 0;
        if self.eat(b':') {
            second = self.digits(2, 2)?;
            if self.eat(b'.') {
                let start = self.pos;
                millis = self.digits(1, 3)?;
                for _ in self.pos - start..3 {
                    millis *= 10;
                }
            }
        }
        crate::utils::checked_add(date, Chronology::time_millis(hour, minute, second, millis)?)
    }

    fn offset(&mut self) -> ChronoResult<Option<i32>> {
        if self.eat(b'Z') {
            return Ok(Some(0));
        }
        let sign = match self.peek() {
            Some(b'+') => 1,
            Some(b'-') => -1,
            _ => return Ok(None),
        };
        self.pos += 1;
        let hours = self.digits(2, 2)?;
        let _ = self.eat(b':');
        let minutes = self.digits(2, 2)?;
        Ok(Some(sign * (hours * 3_600_000 + minutes * 60_000)))
    }

    fn finish(&self) -> ChronoResult<()> {
        if self.pos != self.bytes.len() {
            return Err(self.error());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use crate::{calendar::CalendarSystem, timezone::TimeZone};

    #[test]
    fn print_instants() {
        let mut out = String::new();
        IsoFormat
            .print_instant(&mut out, 1_359_590_400_000, &Chronology::iso_utc())
            .unwrap();
        assert_eq!(out, "2013-01-31T00:00:00.000Z");

        let mut out = String::new();
        let plus_one = Chronology::iso(TimeZone::fixed(3_600_000).unwrap());
        IsoFormat.print_instant(&mut out, -1, &plus_one).unwrap();
        assert_eq!(out, "1970-01-01T00:59:59.999+01:00");

        let mut out = String::new();
        let julian = Chronology::utc(CalendarSystem::Julian);
        IsoFormat.print_instant(&mut out, 0, &julian).unwrap();
        assert_eq!(out, "1969-12-19T00:00:00.000Z");
    }

    #[test]
    fn parse_instants() {
        let iso = Chronology::iso_utc();
        assert_eq!(
            IsoFormat.parse_millis("2013-01-31T00:00:00.000Z", &iso).unwrap(),
            1_359_590_400_000
        );
        assert_eq!(IsoFormat.parse_millis("1970-01-01T01:00+01:00", &iso).unwrap(), 0);
        assert_eq!(IsoFormat.parse_millis("1970-01-01T00:00:00.5", &iso).unwrap(), 500);
        let plus_two = Chronology::iso(TimeZone::fixed(7_200_000).unwrap());
        assert_eq!(IsoFormat.parse_millis("1970-01-01T02:00", &plus_two).unwrap(), 0);
        assert!(IsoFormat.parse_millis("2013-02-30", &iso).is_err());
        assert!(IsoFormat.parse_millis("2013-01-31T", &iso).is_err());
        assert!(IsoFormat.parse_millis("2013-01-31 trailing", &iso).is_err());
    }

    #[test]
    fn parse_local_time_only() {
        let iso = Chronology::iso_utc();
        assert_eq!(
            IsoFormat.parse_local_millis("10:20:30.400", &iso).unwrap(),
            37_230_400
        );
    }
}
