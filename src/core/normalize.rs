use crate::domain::model::EndTimeValue;
use crate::utils::error::{AuctionError, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Wire pattern for listing end times: `2024-08-16T23:59:59.000Z`.
const END_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Display contract shared with the page/CSV consumers:
/// `2024-08-16 16:59:59 PDT-0700`.
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z%z";

/// Resolves an end-time value of unknown representation into an absolute
/// UTC instant.
///
/// String values must match the wire pattern exactly (literal `Z`, optional
/// fractional seconds); anything else is `MalformedTimestamp`. Structured
/// values carrying an offset are converted; offset-naive values are taken
/// as UTC by convention, since the upstream API has never been observed
/// sending anything else.
pub fn parse_end_time(value: &EndTimeValue) -> Result<DateTime<Utc>> {
    match value {
        EndTimeValue::Text(s) => {
            let naive = NaiveDateTime::parse_from_str(s, END_TIME_FORMAT).map_err(|_| {
                AuctionError::MalformedTimestamp { value: s.clone() }
            })?;
            Ok(Utc.from_utc_datetime(&naive))
        }
        EndTimeValue::Aware(dt) => Ok(dt.with_timezone(&Utc)),
        EndTimeValue::Naive(naive) => Ok(Utc.from_utc_datetime(naive)),
    }
}

/// Converts an absolute instant into the named IANA timezone, returning the
/// full display string and the zone abbreviation.
pub fn to_zone(instant: DateTime<Utc>, zone_name: &str) -> Result<(String, String)> {
    let tz: Tz = zone_name
        .parse()
        .map_err(|_| AuctionError::UnknownZone {
            zone: zone_name.to_string(),
        })?;
    let local = instant.with_timezone(&tz);
    Ok((
        local.format(DISPLAY_FORMAT).to_string(),
        local.format("%Z").to_string(),
    ))
}
