use chrono::NaiveDate;

/// The date a recurring month/day falls on in `year`. A 29 February date is
/// observed on 28 February outside leap years.
pub fn observed_in_year(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
        if month == 2 && day == 29 && !is_leap_year(year) {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::{is_leap_year, observed_in_year};
    use chrono::NaiveDate;

    #[test]
    fn observed_in_year_keeps_regular_dates() {
        assert_eq!(
            observed_in_year(2024, 6, 12),
            NaiveDate::from_ymd_opt(2024, 6, 12)
        );
    }

    #[test]
    fn observed_in_year_leap_day_fallback() {
        assert_eq!(
            observed_in_year(2023, 2, 29),
            NaiveDate::from_ymd_opt(2023, 2, 28)
        );
        assert_eq!(
            observed_in_year(2024, 2, 29),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }

    #[test]
    fn observed_in_year_rejects_invalid_dates() {
        assert!(observed_in_year(2024, 4, 31).is_none());
    }

    #[test]
    fn leap_year_logic() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }
}
