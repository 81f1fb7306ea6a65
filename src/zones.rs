//! Static time-zone catalog and zone-aware wall-clock conversion.
//!
//! The catalog is fixed data grouped by region; the store and picker only
//! need lookup-by-id over the flattened list.

use std::sync::OnceLock;

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

use crate::state::types::TimeZone;

/// A region heading with its zones, in display order.
pub struct ZoneGroup {
    pub region: &'static str,
    pub zones: Vec<TimeZone>,
}

fn zone(id: &str, name: &str, offset: &str, abbr: &str, tz_name: &str) -> TimeZone {
    TimeZone {
        id: id.to_string(),
        name: name.to_string(),
        offset: offset.to_string(),
        abbr: abbr.to_string(),
        time_zone_name: tz_name.to_string(),
    }
}

/// The supported zones, grouped by region.
pub fn catalog() -> &'static [ZoneGroup] {
    static CATALOG: OnceLock<Vec<ZoneGroup>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        vec![
            ZoneGroup {
                region: "North America",
                zones: vec![
                    zone("EST", "Eastern Time", "-05:00", "EST", "America/New_York"),
                    zone("CST", "Central Time", "-06:00", "CST", "America/Chicago"),
                    zone("MST", "Mountain Time", "-07:00", "MST", "America/Denver"),
                    zone("PST", "Pacific Time", "-08:00", "PST", "America/Los_Angeles"),
                    zone("AKST", "Alaska Time", "-09:00", "AKST", "America/Anchorage"),
                    zone("HST", "Hawaii Time", "-10:00", "HST", "Pacific/Honolulu"),
                ],
            },
            ZoneGroup {
                region: "Europe",
                zones: vec![
                    zone("GMT", "Greenwich Mean Time", "+00:00", "GMT", "Europe/London"),
                    zone("CET", "Central European Time", "+01:00", "CET", "Europe/Paris"),
                    zone("EET", "Eastern European Time", "+02:00", "EET", "Europe/Helsinki"),
                ],
            },
            ZoneGroup {
                region: "Asia & Pacific",
                zones: vec![
                    zone("IST", "India Standard Time", "+05:30", "IST", "Asia/Kolkata"),
                    zone("CST_CN", "China Standard Time", "+08:00", "CST", "Asia/Shanghai"),
                    zone("JST", "Japan Standard Time", "+09:00", "JST", "Asia/Tokyo"),
                    zone("AEST", "Australian Eastern Time", "+10:00", "AEST", "Australia/Sydney"),
                    zone("NZST", "New Zealand Standard Time", "+12:00", "NZST", "Pacific/Auckland"),
                ],
            },
            ZoneGroup {
                region: "Other",
                zones: vec![zone("UTC", "Coordinated Universal Time", "+00:00", "UTC", "UTC")],
            },
        ]
    })
}

/// Lookup over the flattened catalog.
pub fn find(id: &str) -> Option<&'static TimeZone> {
    catalog()
        .iter()
        .flat_map(|group| group.zones.iter())
        .find(|z| z.id == id)
}

/// The fallback zone used when nothing is stored.
pub fn default_zone() -> TimeZone {
    zone("UTC", "Coordinated Universal Time", "+00:00", "UTC", "UTC")
}

/// Wall-clock time of an instant in some zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallClock {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Long date line, e.g. "Friday, August 29, 2026".
    pub date: String,
}

/// Convert `instant` to the zone's local wall clock. An unrecognized IANA key
/// degrades to UTC rather than failing.
pub fn wall_clock(instant: DateTime<Utc>, zone: &TimeZone) -> WallClock {
    let tz: Tz = zone.time_zone_name.parse().unwrap_or_else(|_| {
        tracing::debug!(key = %zone.time_zone_name, "unknown IANA key, using UTC");
        Tz::UTC
    });
    let local = instant.with_timezone(&tz);
    WallClock {
        hour: local.hour(),
        minute: local.minute(),
        second: local.second(),
        date: local.format("%A, %B %-d, %Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for group in catalog() {
            for z in &group.zones {
                assert!(seen.insert(z.id.clone()), "duplicate id {}", z.id);
            }
        }
        assert_eq!(seen.len(), 15);
    }

    #[test]
    fn find_resolves_known_ids() {
        let jst = find("JST").unwrap();
        assert_eq!(jst.time_zone_name, "Asia/Tokyo");
        assert!(find("XYZ").is_none());
    }

    #[test]
    fn default_zone_matches_catalog_utc() {
        assert_eq!(&default_zone(), find("UTC").unwrap());
    }

    #[test]
    fn wall_clock_applies_zone_offset() {
        // 2026-01-15 12:00:00 UTC is 21:00 in Tokyo (no DST there).
        let instant = DateTime::from_timestamp(1_768_478_400, 0).unwrap();
        let tokyo = wall_clock(instant, find("JST").unwrap());
        assert_eq!((tokyo.hour, tokyo.minute, tokyo.second), (21, 0, 0));
        assert_eq!(tokyo.date, "Thursday, January 15, 2026");
    }

    #[test]
    fn bogus_iana_key_falls_back_to_utc() {
        let instant = DateTime::from_timestamp(1_768_478_400, 0).unwrap();
        let bogus = zone("BAD", "Nowhere", "+00:00", "BAD", "Not/A_Zone");
        let wall = wall_clock(instant, &bogus);
        assert_eq!(wall.hour, 12);
    }
}
