//! Length-of-stay derivations.
//!
//! Both functions propagate null: if either endpoint is missing the result is
//! `None`.

use chrono::NaiveDateTime;

const MILLIS_PER_MINUTE: f64 = 60_000.0;

/// Whole days between admission and discharge.
///
/// Fractional days are truncated toward zero, so a stay of 2 days 5 hours is
/// `2` and a stay of -1.5 days is `-1`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use adm_transform::derive::length_of_stay_days;
///
/// let admit = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
/// let disch = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap().and_hms_opt(15, 0, 0).unwrap();
///
/// assert_eq!(length_of_stay_days(Some(admit), Some(disch)), Some(2));
/// assert_eq!(length_of_stay_days(None, Some(disch)), None);
/// ```
pub fn length_of_stay_days(
    admittime: Option<NaiveDateTime>,
    dischtime: Option<NaiveDateTime>,
) -> Option<i64> {
    Some((dischtime? - admittime?).num_days())
}

/// Elapsed minutes in the emergency department, at millisecond resolution.
pub fn ed_length_of_stay_minutes(
    edregtime: Option<NaiveDateTime>,
    edouttime: Option<NaiveDateTime>,
) -> Option<f64> {
    let elapsed = edouttime? - edregtime?;
    Some(elapsed.num_milliseconds() as f64 / MILLIS_PER_MINUTE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_stay_truncates() {
        assert_eq!(length_of_stay_days(Some(ts(1, 10, 0)), Some(ts(3, 15, 0))), Some(2));
        assert_eq!(length_of_stay_days(Some(ts(1, 10, 0)), Some(ts(2, 9, 59))), Some(0));
        assert_eq!(length_of_stay_days(Some(ts(1, 10, 0)), Some(ts(1, 10, 0))), Some(0));
    }

    #[test]
    fn test_negative_stay_truncates_toward_zero() {
        assert_eq!(length_of_stay_days(Some(ts(3, 10, 0)), Some(ts(1, 10, 0))), Some(-2));
        assert_eq!(length_of_stay_days(Some(ts(3, 10, 0)), Some(ts(1, 22, 0))), Some(-1));
    }

    #[test]
    fn test_sub_day_reversal_derives_zero() {
        // Still a reversed stay; validation flags it from the timestamps.
        let (admit, disch) = (ts(1, 12, 0), ts(1, 10, 0));
        assert!(disch < admit);
        assert_eq!(length_of_stay_days(Some(admit), Some(disch)), Some(0));
    }

    #[test]
    fn test_stay_null_propagation() {
        assert_eq!(length_of_stay_days(None, Some(ts(1, 10, 0))), None);
        assert_eq!(length_of_stay_days(Some(ts(1, 10, 0)), None), None);
        assert_eq!(length_of_stay_days(None, None), None);
    }

    #[test]
    fn test_ed_minutes() {
        assert_eq!(
            ed_length_of_stay_minutes(Some(ts(1, 10, 0)), Some(ts(1, 10, 45))),
            Some(45.0)
        );
        assert_eq!(
            ed_length_of_stay_minutes(Some(ts(1, 10, 45)), Some(ts(1, 10, 0))),
            Some(-45.0)
        );
        let reg = ts(1, 10, 0);
        let out = reg + chrono::TimeDelta::seconds(90);
        assert_eq!(ed_length_of_stay_minutes(Some(reg), Some(out)), Some(1.5));
    }

    #[test]
    fn test_ed_null_propagation() {
        assert_eq!(ed_length_of_stay_minutes(None, Some(ts(1, 10, 0))), None);
        assert_eq!(ed_length_of_stay_minutes(Some(ts(1, 10, 0)), None), None);
    }
}
