//! Text input for dates and times.
//!
//! Components are read literally; no time zone or epoch conversion happens.

use saju_base::{CivilDate, LocalTime};

use crate::error::SajuRsError;

/// Parse `YYYY-MM-DD`. Month and day may omit their leading zero.
pub fn parse_date(s: &str) -> Result<CivilDate, SajuRsError> {
    let bad = || SajuRsError::DateParse(s.to_string());
    let parts: Vec<&str> = s.trim().split('-').collect();
    if parts.len() != 3 {
        return Err(bad());
    }
    let year: i32 = parts[0].parse().map_err(|_| bad())?;
    let month: u32 = parts[1].parse().map_err(|_| bad())?;
    let day: u32 = parts[2].parse().map_err(|_| bad())?;
    Ok(CivilDate::new(year, month, day)?)
}

/// Parse `HH:MM` on a 24-hour clock.
pub fn parse_time(s: &str) -> Result<LocalTime, SajuRsError> {
    let bad = || SajuRsError::TimeParse(s.to_string());
    let (h, m) = s.trim().split_once(':').ok_or_else(bad)?;
    let hour: u32 = h.parse().map_err(|_| bad())?;
    let minute: u32 = m.parse().map_err(|_| bad())?;
    Ok(LocalTime::new(hour, minute)?)
}
