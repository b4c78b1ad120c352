//! Date payloads and their textual forms.
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};

/// An LLSD date.
///
/// No timezone information is carried: the encoder labels every date with a
/// trailing `Z` as given. Producers holding zoned timestamps convert to UTC
/// before building the value (see the `From<DateTime<Utc>>` impl).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Date {
    /// A calendar day without time of day or sub-second precision.
    Calendar(NaiveDate),

    /// A point in time. Microseconds are rendered when non-zero.
    Timestamp(NaiveDateTime),
}

impl Date {
    /// Render the date text that goes between the `<date>` tags, without the
    /// `Z` suffix. Same as the [`Display`](std::fmt::Display) form.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Microsecond field, with leap-second overflow folded back into range.
    pub fn microsecond(&self) -> u32 {
        match self {
            Date::Calendar(_) => 0,
            Date::Timestamp(ts) => (ts.nanosecond() % 1_000_000_000) / 1_000,
        }
    }

    /// `true` when the rendered form carries a fractional-second part.
    pub fn has_subsecond(&self) -> bool {
        self.microsecond() != 0
    }
}

/// Calendar dates use `%Y-%m-%dT%H:%M:%S` at midnight with the year left
/// unpadded, so years below 1000 produce fewer than 19 characters.
/// Timestamps use the ISO-8601 layout with a four-digit year and, when the
/// microsecond field is non-zero, a `.ffffff` fraction.
impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Date::Calendar(day) => write!(
                f,
                "{}-{:02}-{:02}T00:00:00",
                day.year(),
                day.month(),
                day.day()
            ),
            Date::Timestamp(ts) => {
                write!(
                    f,
                    "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
                    ts.year(),
                    ts.month(),
                    ts.day(),
                    ts.hour(),
                    ts.minute(),
                    ts.second()
                )?;
                if self.has_subsecond() {
                    write!(f, ".{:06}", self.microsecond())?;
                }
                Ok(())
            }
        }
    }
}

impl From<NaiveDate> for Date {
    fn from(value: NaiveDate) -> Self {
        Date::Calendar(value)
    }
}

impl From<NaiveDateTime> for Date {
    fn from(value: NaiveDateTime) -> Self {
        Date::Timestamp(value)
    }
}

impl From<DateTime<Utc>> for Date {
    fn from(value: DateTime<Utc>) -> Self {
        Date::Timestamp(value.naive_utc())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;

    fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, micro: u32) -> Date {
        let date = NaiveDate::from_ymd_opt(y, mo, d).unwrap();
        let time = NaiveTime::from_hms_micro_opt(h, mi, s, micro).unwrap();
        Date::Timestamp(NaiveDateTime::new(date, time))
    }

    #[test]
    fn whole_second_timestamp() {
        let date = ts(2008, 2, 29, 13, 5, 9, 0);
        assert_eq!(date.to_text(), "2008-02-29T13:05:09");
        assert!(!date.has_subsecond());
    }

    #[test]
    fn fractional_timestamp_uses_six_digits() {
        assert_eq!(
            ts(2009, 2, 2, 0, 0, 0, 1500).to_text(),
            "2009-02-02T00:00:00.001500"
        );
    }

    #[test]
    fn calendar_day_renders_midnight() {
        let day = Date::Calendar(NaiveDate::from_ymd_opt(2010, 7, 4).unwrap());
        assert_eq!(day.to_text(), "2010-07-04T00:00:00");
    }

    #[test]
    fn early_calendar_year_is_unpadded() {
        let day = Date::Calendar(NaiveDate::from_ymd_opt(33, 1, 1).unwrap());
        assert_eq!(day.to_text(), "33-01-01T00:00:00");
    }

    #[test]
    fn early_timestamp_year_is_padded() {
        assert_eq!(ts(33, 1, 1, 0, 0, 0, 0).to_text(), "0033-01-01T00:00:00");
    }
}
