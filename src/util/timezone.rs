use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use time::{Date, Month, OffsetDateTime, Time, UtcOffset};

pub fn localized_datetime(time: OffsetDateTime, tz: Tz) -> Option<DateTime<Tz>> {
    let utc = time.to_offset(UtcOffset::UTC);
    let datetime_utc = DateTime::<Utc>::from_timestamp(utc.unix_timestamp(), utc.nanosecond())?;
    Some(tz.from_utc_datetime(&datetime_utc.naive_utc()))
}

/// Calendar date of `time` as seen on a wall clock in `tz`.
pub fn localized_date(time: OffsetDateTime, tz: Tz) -> Option<Date> {
    let localized = localized_datetime(time, tz)?;
    let month = Month::try_from(u8::try_from(localized.month()).ok()?).ok()?;
    let day = u8::try_from(localized.day()).ok()?;
    Date::from_calendar_date(localized.year(), month, day).ok()
}

/// Resolves a wall-clock `date` and `time` in `tz` to an instant.
///
/// Ambiguous times (clocks falling back) resolve to the earlier instant; times
/// skipped by a forward transition yield `None`.
pub fn local_to_utc(date: Date, time: Time, tz: Tz) -> Option<OffsetDateTime> {
    let month = u32::from(u8::from(date.month()));
    let naive = NaiveDate::from_ymd_opt(date.year(), month, u32::from(date.day()))?
        .and_hms_opt(
            u32::from(time.hour()),
            u32::from(time.minute()),
            u32::from(time.second()),
        )?;
    let local = tz.from_local_datetime(&naive).earliest()?;
    OffsetDateTime::from_unix_timestamp(local.timestamp()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime, time};

    #[test]
    fn localized_date_crosses_midnight_ahead_of_utc() {
        let instant = datetime!(2026-10-16 20:00 UTC);
        assert_eq!(
            localized_date(instant, Tz::Asia__Kolkata),
            Some(date!(2026 - 10 - 17))
        );
        assert_eq!(
            localized_date(instant, Tz::America__New_York),
            Some(date!(2026 - 10 - 16))
        );
    }

    #[test]
    fn kolkata_wall_clock_converts_to_utc() {
        let instant = local_to_utc(date!(2026 - 10 - 19), time!(14:00), Tz::Asia__Kolkata);
        assert_eq!(instant, Some(datetime!(2026-10-19 08:30 UTC)));
    }

    #[test]
    fn skipped_wall_clock_time_is_unresolvable() {
        let instant = local_to_utc(date!(2026 - 03 - 08), time!(2:30), Tz::America__New_York);
        assert_eq!(instant, None);
    }

    #[test]
    fn ambiguous_wall_clock_time_takes_the_earlier_instant() {
        let instant = local_to_utc(date!(2026 - 11 - 01), time!(1:30), Tz::America__New_York);
        assert_eq!(instant, Some(datetime!(2026-11-01 05:30 UTC)));
    }
}
