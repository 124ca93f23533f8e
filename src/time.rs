use hifitime::{Epoch, TimeScale};

use crate::constants::DecimalYear;

/// Length of a Gregorian calendar year in seconds.
///
/// The year is measured between two consecutive January 1st midnights on the TAI scale,
/// so leap seconds never enter the count: the result is exactly 365 or 366 days.
///
/// Argument
/// --------
/// * `year`: calendar year (proleptic Gregorian)
///
/// Return
/// ------
/// * the number of seconds in `year`
pub fn seconds_in_year(year: i32) -> f64 {
    let start = Epoch::from_gregorian(year, 1, 1, 0, 0, 0, 0, TimeScale::TAI);
    let end = Epoch::from_gregorian(year + 1, 1, 1, 0, 0, 0, 0, TimeScale::TAI);
    (end - start).to_seconds()
}

/// Seconds elapsed from January 1st of `start` up to January 1st of `end`.
fn seconds_between_years(start: i32, end: i32) -> f64 {
    (start..end).map(seconds_in_year).sum()
}

/// Fraction of an epoch bracket elapsed at `date`.
///
/// Inside the bracket, time is measured in calendar seconds: every whole year between
/// `start` and the year containing `date` contributes its exact length (365 or 366 days),
/// the remainder of that year is scaled by its own length, and the total is divided by
/// the number of seconds in the whole bracket. A leap year therefore yields a slightly
/// smaller fraction than a common year for the same nominal offset.
///
/// Arguments
/// ---------
/// * `start`: first year of the bracket
/// * `end`: last year of the bracket
/// * `date`: decimal year
///
/// Return
/// ------
/// * `0.0` for a degenerate bracket (`end <= start`)
/// * the plain ratio `(date - start) / (end - start)` when `date` lies outside the
///   bracket; this may exceed 1 for the one-year lookahead used by secular variation
/// * the calendar-accurate fraction in `[0, 1]` otherwise
pub fn date_factor(start: i32, end: i32, date: DecimalYear) -> f64 {
    if end <= start {
        return 0.0;
    }

    let (start_f, end_f) = (start as f64, end as f64);
    if date > end_f || date < start_f {
        return (date - start_f) / (end_f - start_f);
    }

    let year = date.floor() as i32;
    let elapsed =
        seconds_between_years(start, year) + (date - year as f64) * seconds_in_year(year);
    elapsed / seconds_between_years(start, end)
}
