use crate::domain::{Birthday, Record};
use crate::error::CoreError;
use crate::rules::dates::observed_in_year;
use chrono::{Datelike, Days, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

pub const DEFAULT_WINDOW_DAYS: i64 = 7;
pub const MAX_WINDOW_DAYS: i64 = 366;

pub fn validate_window_days(days: i64) -> Result<i64, CoreError> {
    if !(1..=MAX_WINDOW_DAYS).contains(&days) {
        return Err(CoreError::InvalidWindowDays(days));
    }
    Ok(days)
}

/// How weekday lines are ordered in a [`BirthdayReport`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeekdayOrder {
    /// The order in which weekdays were first filled while scanning contacts.
    #[default]
    FirstSeen,
    /// Monday through Sunday.
    Calendar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPolicy {
    pub window_days: i64,
    pub order: WeekdayOrder,
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            order: WeekdayOrder::FirstSeen,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthdayBucket {
    #[serde(serialize_with = "serialize_weekday")]
    pub weekday: Weekday,
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BirthdayReport {
    buckets: Vec<BirthdayBucket>,
}

impl BirthdayReport {
    pub fn buckets(&self) -> &[BirthdayBucket] {
        &self.buckets
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn names_for(&self, weekday: Weekday) -> Option<&[String]> {
        self.buckets
            .iter()
            .find(|bucket| bucket.weekday == weekday)
            .map(|bucket| bucket.names.as_slice())
    }

    fn push(&mut self, weekday: Weekday, name: &str) {
        match self
            .buckets
            .iter_mut()
            .find(|bucket| bucket.weekday == weekday)
        {
            Some(bucket) => bucket.names.push(name.to_string()),
            None => self.buckets.push(BirthdayBucket {
                weekday,
                names: vec![name.to_string()],
            }),
        }
    }

    fn sort_by_calendar(&mut self) {
        self.buckets
            .sort_by_key(|bucket| bucket.weekday.num_days_from_monday());
    }
}

/// One `"<Weekday>: a, b"` line per non-empty weekday, no trailing newline.
impl fmt::Display for BirthdayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, bucket) in self.buckets.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{}: {}",
                weekday_name(bucket.weekday),
                bucket.names.join(", ")
            )?;
        }
        Ok(())
    }
}

/// Groups contacts whose birthday comes up within `policy.window_days` of
/// `now` by the weekday they should be congratulated on.
pub fn upcoming_birthdays<'a, I>(
    records: I,
    now: NaiveDateTime,
    policy: WindowPolicy,
) -> BirthdayReport
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut report = BirthdayReport::default();
    for record in records {
        let Some(birthday) = record.birthday() else {
            continue;
        };
        if let Some(weekday) = notification_weekday(birthday, now, policy.window_days) {
            report.push(weekday, record.name().as_str());
        }
    }
    if policy.order == WeekdayOrder::Calendar {
        report.sort_by_calendar();
    }
    report
}

/// Weekday on which `birthday` is reported, or `None` when it falls outside
/// the window. The birthday is moved into `now`'s year and must lie strictly
/// after `now`; since `now` has a time of day, a birthday on today's date is
/// excluded. Saturday and Sunday birthdays are reported on the next Monday.
pub fn notification_weekday(
    birthday: Birthday,
    now: NaiveDateTime,
    window_days: i64,
) -> Option<Weekday> {
    let this_year = observed_in_year(now.year(), birthday.month(), birthday.day())?;
    let starts_at = this_year.and_hms_opt(0, 0, 0)?;
    if starts_at <= now {
        return None;
    }

    let delta_days = (starts_at - now).num_days();
    if !(0..window_days).contains(&delta_days) {
        return None;
    }

    let observed = match this_year.weekday() {
        Weekday::Sat => this_year.checked_add_days(Days::new(2))?,
        Weekday::Sun => this_year.checked_add_days(Days::new(1))?,
        _ => this_year,
    };
    Some(observed.weekday())
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn serialize_weekday<S>(weekday: &Weekday, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(weekday_name(*weekday))
}
