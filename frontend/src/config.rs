use chrono::{DateTime, Datelike, TimeZone};
use chrono_tz::Tz;
use log::Level;

pub const CONTACT_EMAIL: &str = "info@tntx.org";

// TODO: replace with the live Zoho form once it is published
pub const APPLICATION_FORM_URL: &str = "https://forms.zohopublic.com/your-form-url";

/// The program runs in Coimbatore; all cohort dates are local to it.
pub const PROGRAM_TZ: Tz = chrono_tz::Asia::Kolkata;

fn program_time(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Tz> {
    PROGRAM_TZ
        .with_ymd_and_hms(year, month, day, hour, min, sec)
        .earliest()
        .expect("program dates are fixed valid local times")
}

pub fn cohort_start() -> DateTime<Tz> {
    program_time(2025, 6, 7, 0, 0, 0)
}

pub fn application_deadline() -> DateTime<Tz> {
    program_time(2025, 3, 31, 23, 59, 59)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// "March 31st, 2025"
pub fn format_long_date<T: TimeZone>(date: &DateTime<T>) -> String
where
    T::Offset: std::fmt::Display,
{
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

/// "June 7"
pub fn format_short_date<T: TimeZone>(date: &DateTime<T>) -> String
where
    T::Offset: std::fmt::Display,
{
    format!("{} {}", date.format("%B"), date.day())
}

/// "June 7th"
pub fn format_day_of_month<T: TimeZone>(date: &DateTime<T>) -> String
where
    T::Offset: std::fmt::Display,
{
    format!("{} {}{}", date.format("%B"), date.day(), ordinal_suffix(date.day()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn cohort_dates_are_local_to_the_program() {
        let start = cohort_start();
        assert_eq!(start.format("%Y-%m-%dT%H:%M:%S").to_string(), "2025-06-07T00:00:00");
        // IST is UTC+05:30 with no daylight saving.
        assert_eq!(
            start.with_timezone(&Utc).format("%Y-%m-%dT%H:%M").to_string(),
            "2025-06-06T18:30"
        );
        assert!(application_deadline() < start);
    }

    #[test]
    fn ordinal_suffixes() {
        let cases = [
            (1, "st"), (2, "nd"), (3, "rd"), (4, "th"), (11, "th"), (12, "th"),
            (13, "th"), (21, "st"), (22, "nd"), (23, "rd"), (30, "th"), (31, "st"),
        ];
        for (day, suffix) in cases {
            assert_eq!(ordinal_suffix(day), suffix, "day {}", day);
        }
    }

    #[test]
    fn date_labels() {
        assert_eq!(format_long_date(&application_deadline()), "March 31st, 2025");
        assert_eq!(format_short_date(&cohort_start()), "June 7");
        assert_eq!(format_day_of_month(&cohort_start()), "June 7th");
    }
}
