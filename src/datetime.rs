//! Unix time, time-zone and date parsing helpers built on `chrono`
//!
//! A [`NaiveDateTime`] carries no zone, so the functions that produce or
//! consume one take a [`DateTimeKind`] saying whether the wall clock is UTC
//! or the machine's local time.

use chrono::{
    DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{HelperError, Result};

static OFFSET_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-])(\d{2})(?::?(\d{2}))?$").expect("offset pattern is valid")
});

const DATE_TIME_FORMATS: [&str; 8] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d %B %Y %H:%M:%S",
];

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%d %B %Y", "%B %d, %Y"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateTimeKind {
    #[default]
    Local,
    Utc,
}

fn to_wall_clock(instant: DateTime<Utc>, kind: DateTimeKind) -> NaiveDateTime {
    match kind {
        DateTimeKind::Utc => instant.naive_utc(),
        DateTimeKind::Local => instant.with_timezone(&Local).naive_local(),
    }
}

fn to_instant(date_time: &NaiveDateTime, kind: DateTimeKind) -> Result<DateTime<Utc>> {
    match kind {
        DateTimeKind::Utc => Ok(date_time.and_utc()),
        // A repeated hour (DST fold) takes the earlier instant.
        DateTimeKind::Local => Local
            .from_local_datetime(date_time)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
            .ok_or_else(|| HelperError::NonexistentLocalTime(date_time.to_string())),
    }
}

/// Converts milliseconds since the Unix epoch to a wall-clock date-time.
///
/// # Example
/// ```
/// use codehelpers::datetime::{from_unix_millis, DateTimeKind};
/// let dt = from_unix_millis(1_500, DateTimeKind::Utc).unwrap();
/// assert_eq!(dt.to_string(), "1970-01-01 00:00:01.500");
/// ```
pub fn from_unix_millis(millis: i64, kind: DateTimeKind) -> Result<NaiveDateTime> {
    let instant =
        DateTime::from_timestamp_millis(millis).ok_or(HelperError::TimestampOutOfRange(millis))?;
    Ok(to_wall_clock(instant, kind))
}

/// Converts seconds since the Unix epoch to a wall-clock date-time.
pub fn from_unix_seconds(seconds: i64, kind: DateTimeKind) -> Result<NaiveDateTime> {
    let instant =
        DateTime::from_timestamp(seconds, 0).ok_or(HelperError::TimestampOutOfRange(seconds))?;
    Ok(to_wall_clock(instant, kind))
}

/// Milliseconds since the Unix epoch for a wall clock read as `kind`.
pub fn to_unix_millis(date_time: &NaiveDateTime, kind: DateTimeKind) -> Result<i64> {
    to_instant(date_time, kind).map(|instant| instant.timestamp_millis())
}

/// Seconds since the Unix epoch for a wall clock read as `kind`.
pub fn to_unix_seconds(date_time: &NaiveDateTime, kind: DateTimeKind) -> Result<i64> {
    to_instant(date_time, kind).map(|instant| instant.timestamp())
}

/// Same instant, seen from `zone`.
pub fn convert_to_time_zone<Zone: TimeZone, Target: TimeZone>(
    date_time: &DateTime<Zone>,
    zone: &Target,
) -> DateTime<Target> {
    date_time.with_timezone(zone)
}

/// Parses a zone identifier into a fixed offset.
///
/// Accepts `UTC`, `GMT` and `Z` (any case) and signed offsets such as `+03:00`,
/// `-0300` or `+05`. Named zones are handled by [`parse_time_zone`].
pub fn parse_offset(zone_id: &str) -> Result<FixedOffset> {
    let trimmed = zone_id.trim();
    let invalid = || HelperError::InvalidTimeZone(zone_id.to_string());

    if ["UTC", "GMT", "Z"]
        .iter()
        .any(|name| trimmed.eq_ignore_ascii_case(name))
    {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    let captures = OFFSET_PATTERN.captures(trimmed).ok_or_else(invalid)?;
    let hours: i32 = captures[2].parse().map_err(|_| invalid())?;
    let minutes: i32 = match captures.get(3) {
        Some(m) => m.as_str().parse().map_err(|_| invalid())?,
        None => 0,
    };
    if minutes >= 60 {
        debug!(zone_id, "offset minutes out of range");
        return Err(invalid());
    }

    let magnitude = hours * 3600 + minutes * 60;
    let seconds = if &captures[1] == "-" { -magnitude } else { magnitude };
    FixedOffset::east_opt(seconds).ok_or_else(invalid)
}

/// Looks up an IANA zone name such as `America/Sao_Paulo`.
pub fn parse_time_zone(zone_id: &str) -> Result<Tz> {
    zone_id.trim().parse::<Tz>().map_err(|err| {
        debug!(zone_id, error = %err, "unknown time zone");
        HelperError::InvalidTimeZone(zone_id.to_string())
    })
}

/// Same instant, seen from the zone named by `zone_id`.
///
/// `zone_id` is anything [`parse_offset`] accepts, or an IANA name. For a
/// named zone the offset is the one in force at that instant, daylight
/// saving included.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use codehelpers::datetime::convert_to_offset;
///
/// let noon = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
/// let there = convert_to_offset(&noon, "+05:30").unwrap();
/// assert_eq!(there.format("%H:%M").to_string(), "17:30");
///
/// let tokyo = convert_to_offset(&noon, "Asia/Tokyo").unwrap();
/// assert_eq!(tokyo.format("%H:%M %:z").to_string(), "21:00 +09:00");
/// ```
pub fn convert_to_offset<Zone: TimeZone>(
    date_time: &DateTime<Zone>,
    zone_id: &str,
) -> Result<DateTime<FixedOffset>> {
    if let Ok(offset) = parse_offset(zone_id) {
        return Ok(date_time.with_timezone(&offset));
    }
    let zone = parse_time_zone(zone_id)?;
    Ok(date_time.with_timezone(&zone).fixed_offset())
}

/// Same instant, in São Paulo official time.
///
/// Daylight saving applies for the dates Brazil observed it (last in the
/// 2018/19 summer).
pub fn to_brazil_time<Zone: TimeZone>(date_time: &DateTime<Zone>) -> DateTime<Tz> {
    date_time.with_timezone(&chrono_tz::America::Sao_Paulo)
}

/// Parses common date and date-time layouts.
///
/// RFC 3339 and RFC 2822 inputs keep the wall clock they were written in.
/// Date-only layouts yield midnight.
pub fn parse_date_time(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.naive_local());
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(parsed.naive_local());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

pub fn is_date_time(input: &str) -> bool {
    parse_date_time(input).is_some()
}

/// Unix timestamp conversions on `i64`.
pub trait UnixTimeExt {
    fn to_date_time_from_unix_millis(self, kind: DateTimeKind) -> Result<NaiveDateTime>;
    fn to_date_time_from_unix_seconds(self, kind: DateTimeKind) -> Result<NaiveDateTime>;
}

impl UnixTimeExt for i64 {
    fn to_date_time_from_unix_millis(self, kind: DateTimeKind) -> Result<NaiveDateTime> {
        from_unix_millis(self, kind)
    }

    fn to_date_time_from_unix_seconds(self, kind: DateTimeKind) -> Result<NaiveDateTime> {
        from_unix_seconds(self, kind)
    }
}

pub trait NaiveDateTimeExt {
    fn to_unix_millis(&self, kind: DateTimeKind) -> Result<i64>;
    fn to_unix_seconds(&self, kind: DateTimeKind) -> Result<i64>;
}

impl NaiveDateTimeExt for NaiveDateTime {
    fn to_unix_millis(&self, kind: DateTimeKind) -> Result<i64> {
        to_unix_millis(self, kind)
    }

    fn to_unix_seconds(&self, kind: DateTimeKind) -> Result<i64> {
        to_unix_seconds(self, kind)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn unix_to_utc_wall_clock() {
        let epoch = from_unix_seconds(0, DateTimeKind::Utc).unwrap();
        assert_eq!(epoch, utc(1970, 1, 1, 0, 0, 0).naive_utc());

        let dt = from_unix_millis(1_700_000_000_123, DateTimeKind::Utc).unwrap();
        assert_eq!(dt.to_string(), "2023-11-14 22:13:20.123");
    }

    #[test]
    fn unix_to_local_wall_clock() {
        let expected = Local.timestamp_opt(1_700_000_000, 0).unwrap().naive_local();
        assert_eq!(
            from_unix_seconds(1_700_000_000, DateTimeKind::Local).unwrap(),
            expected
        );
        assert_eq!(DateTimeKind::default(), DateTimeKind::Local);
    }

    #[test]
    fn out_of_range_timestamps() {
        assert!(matches!(
            from_unix_millis(i64::MAX, DateTimeKind::Utc),
            Err(HelperError::TimestampOutOfRange(i64::MAX))
        ));
        assert!(matches!(
            from_unix_seconds(i64::MIN, DateTimeKind::Local),
            Err(HelperError::TimestampOutOfRange(_))
        ));
    }

    #[test]
    fn wall_clock_to_unix() {
        let dt = utc(2023, 11, 14, 22, 13, 20).naive_utc();
        assert_eq!(to_unix_seconds(&dt, DateTimeKind::Utc).unwrap(), 1_700_000_000);
        assert_eq!(dt.to_unix_millis(DateTimeKind::Utc).unwrap(), 1_700_000_000_000);

        let local = from_unix_seconds(1_700_000_000, DateTimeKind::Local).unwrap();
        assert_eq!(local.to_unix_seconds(DateTimeKind::Local).unwrap(), 1_700_000_000);
    }

    #[test]
    fn i64_extension() {
        let dt = 86_400i64.to_date_time_from_unix_seconds(DateTimeKind::Utc).unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (1970, 1, 2));
        let dt = 1_000i64.to_date_time_from_unix_millis(DateTimeKind::Utc).unwrap();
        assert_eq!(dt.second(), 1);
    }

    #[test]
    fn offsets() {
        assert_eq!(parse_offset("UTC").unwrap().local_minus_utc(), 0);
        assert_eq!(parse_offset("z").unwrap().local_minus_utc(), 0);
        assert_eq!(parse_offset("+05:30").unwrap().local_minus_utc(), 19_800);
        assert_eq!(parse_offset("-0300").unwrap().local_minus_utc(), -10_800);
        assert_eq!(parse_offset("+09").unwrap().local_minus_utc(), 32_400);

        for bad in ["America/Sao_Paulo", "+25:00", "+05:75", "+05:", "0300", ""] {
            assert!(
                matches!(parse_offset(bad), Err(HelperError::InvalidTimeZone(_))),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn zone_conversions_keep_the_instant() {
        let midnight = utc(2024, 1, 1, 0, 0, 0);

        let shifted = convert_to_offset(&midnight, "-03:00").unwrap();
        assert_eq!(shifted.naive_local().to_string(), "2023-12-31 21:00:00");
        assert_eq!(shifted, midnight);

        let brazil = to_brazil_time(&midnight);
        assert_eq!(brazil.naive_local(), shifted.naive_local());
        assert_eq!(brazil, midnight);

        let offset = FixedOffset::east_opt(3600).unwrap();
        let there = convert_to_time_zone(&midnight, &offset);
        assert_eq!(there.hour(), 1);
        assert_eq!(convert_to_time_zone(&there, &Utc), midnight);
    }

    #[test]
    fn named_zones() {
        assert_eq!(parse_time_zone("America/Sao_Paulo").unwrap(), Tz::America__Sao_Paulo);
        assert!(matches!(
            parse_time_zone("Mars/Olympus_Mons"),
            Err(HelperError::InvalidTimeZone(_))
        ));

        let summer = utc(2024, 7, 1, 12, 0, 0);
        let paris = convert_to_offset(&summer, " Europe/Paris ").unwrap();
        assert_eq!(paris.naive_local().to_string(), "2024-07-01 14:00:00");
        assert_eq!(paris.offset().local_minus_utc(), 7_200);

        let winter = convert_to_offset(&utc(2024, 1, 1, 12, 0, 0), "Europe/Paris").unwrap();
        assert_eq!(winter.offset().local_minus_utc(), 3_600);

        assert!(matches!(
            convert_to_offset(&summer, "Not/A_Zone"),
            Err(HelperError::InvalidTimeZone(_))
        ));
    }

    #[test]
    fn brazil_time_follows_historic_daylight_saving() {
        // January 2018 fell in Brazilian summer time (UTC-2).
        let brazil = to_brazil_time(&utc(2018, 1, 15, 12, 0, 0));
        assert_eq!(brazil.naive_local().to_string(), "2018-01-15 10:00:00");
        assert_eq!(brazil.fixed_offset().offset().local_minus_utc(), -7_200);

        let brazil = to_brazil_time(&utc(2018, 7, 15, 12, 0, 0));
        assert_eq!(brazil.naive_local().to_string(), "2018-07-15 09:00:00");
        assert_eq!(brazil.fixed_offset().offset().local_minus_utc(), -10_800);
    }

    #[test]
    fn parses_common_layouts() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();

        for input in [
            "2024-03-15T10:30:00Z",
            "2024-03-15T10:30:00+02:00",
            "Fri, 15 Mar 2024 10:30:00 +0000",
            "2024-03-15 10:30:00",
            "2024-03-15T10:30:00",
            "2024-03-15 10:30",
            "03/15/2024 10:30:00",
            " 2024-03-15 10:30:00 ",
        ] {
            assert_eq!(parse_date_time(input), Some(expected), "{}", input);
        }

        let midnight = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(parse_date_time("2024-03-15"), Some(midnight));
        assert_eq!(parse_date_time("March 15, 2024"), Some(midnight));
    }

    #[test]
    fn rejects_non_dates() {
        assert!(!is_date_time(""));
        assert!(!is_date_time("yesterday"));
        assert!(!is_date_time("2024-13-01"));
        assert!(!is_date_time("31/31/2024"));
        assert!(is_date_time("2024-02-29"));
        assert!(!is_date_time("2023-02-29"));
    }
}
