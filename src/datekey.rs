//! Warehouse-style integer surrogate keys for dates and times.
//!
//! A date renders as `yyyymmdd` and a time of day as `9hhmmss`, so both
//! key spaces sort chronologically within themselves. No calendar
//! validation is performed; the caller supplies components it already
//! trusts. Independent of the iteration core.

/// Key for a calendar date: `year * 10_000 + month * 100 + day`.
pub fn date_key(year: u16, month: u8, day: u8) -> u32 {
    u32::from(year) * 10_000 + u32::from(month) * 100 + u32::from(day)
}

/// Key for a time of day, offset into its own range:
/// `9_000_000 + hour * 10_000 + minute * 100 + second`.
pub fn time_key(hour: u8, minute: u8, second: u8) -> u32 {
    9_000_000 + u32::from(hour) * 10_000 + u32::from(minute) * 100 + u32::from(second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_keys_render_as_yyyymmdd() {
        assert_eq!(date_key(2014, 1, 1), 20_140_101);
        assert_eq!(date_key(2014, 2, 1), 20_140_201);
        assert_eq!(date_key(2014, 2, 2), 20_140_202);
        assert_eq!(date_key(1, 1, 1), 10_101);
        assert_eq!(date_key(9999, 12, 31), 99_991_231);
    }

    #[test]
    fn time_keys_sit_in_their_own_range() {
        assert_eq!(time_key(0, 0, 0), 9_000_000);
        assert_eq!(time_key(1, 1, 1), 9_010_101);
        assert_eq!(time_key(1, 2, 1), 9_010_201);
        assert_eq!(time_key(1, 1, 2), 9_010_102);
        assert_eq!(time_key(23, 59, 59), 9_235_959);
    }

    #[test]
    fn time_keys_stay_below_modern_date_keys() {
        assert!(time_key(23, 59, 59) < date_key(1000, 1, 1));
    }
}
