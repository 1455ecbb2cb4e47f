use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

use crate::data_fetcher::models::{Championship, TournamentMetadata};
use crate::error::AppError;

/// Renders an epoch-millisecond timestamp as `YYYY-MM-DD HH:MM:SS` in `tz`.
///
/// A sub-second part is kept as a six-digit fraction; whole seconds get no
/// fraction at all.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use faceit_export::data_fetcher::processors::format_start_time;
///
/// assert_eq!(format_start_time(1_705_343_400_000, &Utc).unwrap(), "2024-01-15 18:30:00");
/// assert_eq!(format_start_time(1_705_343_400_250, &Utc).unwrap(), "2024-01-15 18:30:00.250000");
/// ```
pub fn format_start_time<Tz>(epoch_millis: i64, tz: &Tz) -> Result<String, AppError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let utc = DateTime::from_timestamp_millis(epoch_millis)
        .ok_or(AppError::InvalidTimestamp(epoch_millis))?;
    let local = utc.with_timezone(tz);

    let mut rendered = local.format("%Y-%m-%d %H:%M:%S").to_string();
    let micros = local.timestamp_subsec_micros();
    if micros != 0 {
        rendered.push_str(&format!(".{micros:06}"));
    }
    Ok(rendered)
}

/// Builds the report metadata for a championship using the given timezone.
pub fn tournament_metadata_in<Tz>(
    championship: &Championship,
    tz: &Tz,
) -> Result<TournamentMetadata, AppError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    Ok(TournamentMetadata {
        name: championship.name.clone(),
        start: format_start_time(championship.championship_start, tz)?,
        region: championship.region.clone(),
        prize_pool: championship.total_prizes.to_string(),
    })
}

/// Builds the report metadata with the start time in the system's local timezone.
pub fn tournament_metadata(championship: &Championship) -> Result<TournamentMetadata, AppError> {
    tournament_metadata_in(championship, &Local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;
    use chrono::{FixedOffset, Utc};
    use serde_json::json;

    #[test]
    fn test_format_start_time_whole_seconds() {
        assert_eq!(format_start_time(0, &Utc).unwrap(), "1970-01-01 00:00:00");
    }

    #[test]
    fn test_format_start_time_fraction() {
        assert_eq!(format_start_time(1_001, &Utc).unwrap(), "1970-01-01 00:00:01.001000");
    }

    #[test]
    fn test_format_start_time_respects_offset() {
        let helsinki_winter = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            format_start_time(1_705_343_400_000, &helsinki_winter).unwrap(),
            "2024-01-15 20:30:00"
        );
    }

    #[test]
    fn test_format_start_time_out_of_range() {
        assert!(matches!(
            format_start_time(i64::MAX, &Utc),
            Err(AppError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_tournament_metadata_in_utc() {
        let championship: Championship = serde_json::from_value(TestDataBuilder::championship(
            "Winter Open",
            1_705_343_400_000,
            "EU",
            json!(2500),
        ))
        .unwrap();

        let metadata = tournament_metadata_in(&championship, &Utc).unwrap();

        assert_eq!(
            metadata,
            TournamentMetadata {
                name: "Winter Open".to_string(),
                start: "2024-01-15 18:30:00".to_string(),
                region: "EU".to_string(),
                prize_pool: "2500".to_string(),
            }
        );
    }
}
