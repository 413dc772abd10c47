pub mod birthdays;
pub mod dates;

pub use birthdays::{
    notification_weekday, upcoming_birthdays, validate_window_days, weekday_name,
    BirthdayBucket, BirthdayReport, WeekdayOrder, WindowPolicy, DEFAULT_WINDOW_DAYS,
    MAX_WINDOW_DAYS,
};
pub use dates::{is_leap_year, observed_in_year};
