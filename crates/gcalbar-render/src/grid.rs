//! Multi-week calendar grid.
//!
//! Produces the fixed-width text block on the left of the widget: a header
//! row of weekday labels followed by one row per week, with the current day
//! highlighted and a month abbreviation on rows containing a month's 1st.

use chrono::{Datelike, Duration, NaiveDate};

use crate::highlight::highlight;

/// Visible width of every grid row: 4-column month gutter + 7 day cells.
pub const GRID_ROW_WIDTH: usize = 4 + 7 * 3;

const HEADER: &str = "    Mo Di Mi Do Fr Sa So ";

/// Build the grid for the `weeks`-week window whose first row is the week of
/// `reference`. Weeks start on Monday (ISO weekday convention).
///
/// Returns `weeks + 1` lines: the constant header plus one line per week.
/// Pure date arithmetic; no failure paths.
pub fn build_grid(reference: NaiveDate, weeks: usize, accent: u8) -> Vec<String> {
    let mut lines = Vec::with_capacity(weeks + 1);
    lines.push(highlight(accent, HEADER));

    let first_monday = monday_of(reference);
    for week in 0..weeks {
        let monday = first_monday + Duration::days(week as i64 * 7);
        let sunday = monday + Duration::days(6);

        // A week containing a month's 1st has its Sunday on day-of-month <= 7.
        let mut row = if sunday.day() <= 7 {
            format!("{} ", highlight(accent, &month_abbrev(sunday)))
        } else {
            "    ".to_string()
        };

        for offset in 0..7 {
            let day = monday + Duration::days(offset);
            let cell = format!("{:>2} ", day.day());
            if day == reference {
                row.push_str(&highlight(accent, &cell));
            } else {
                row.push_str(&cell);
            }
        }
        lines.push(row);
    }
    lines
}

/// The Monday on or before `date`.
fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// 3-letter English month abbreviation.
fn month_abbrev(date: NaiveDate) -> String {
    date.format("%b").to_string()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn visible(line: &str) -> String {
        // Strip conky color markers to measure what the terminal shows.
        let mut out = String::new();
        let mut rest = line;
        while let Some(start) = rest.find("${") {
            out.push_str(&rest[..start]);
            match rest[start..].find('}') {
                Some(end) => rest = &rest[start + end + 1..],
                None => break,
            }
        }
        out.push_str(rest);
        out
    }

    #[test]
    fn test_line_count_is_weeks_plus_header() {
        for weeks in [1, 4, 14] {
            let lines = build_grid(date(2026, 8, 24), weeks, 1);
            assert_eq!(lines.len(), weeks + 1);
        }
    }

    #[test]
    fn test_header_is_constant() {
        let a = build_grid(date(2026, 8, 24), 2, 1);
        let b = build_grid(date(1999, 1, 1), 2, 1);
        assert_eq!(a[0], b[0]);
        assert_eq!(a[0], "${color1}    Mo Di Mi Do Fr Sa So ${color0}");
    }

    #[test]
    fn test_rows_have_constant_visible_width() {
        let lines = build_grid(date(2026, 8, 24), 14, 1);
        for line in &lines {
            assert_eq!(visible(line).len(), GRID_ROW_WIDTH, "line: {line:?}");
        }
    }

    #[test]
    fn test_exactly_one_highlighted_day_cell() {
        // 2026-08-24 is a Monday, so it is the very first cell.
        let lines = build_grid(date(2026, 8, 24), 14, 1);
        let highlighted: usize = lines[1..]
            .iter()
            .map(|l| l.matches("${color1}24 ${color0}").count())
            .sum();
        assert_eq!(highlighted, 1);
        assert!(lines[1].starts_with("    ${color1}24 ${color0}"));
    }

    #[test]
    fn test_highlight_matches_reference_day_midweek() {
        // 2026-08-27 is a Thursday: slot 3 of the first row.
        let lines = build_grid(date(2026, 8, 27), 4, 1);
        assert_eq!(visible(&lines[1]), "    24 25 26 27 28 29 30 ");
        assert!(lines[1].contains("${color1}27 ${color0}"));
        assert_eq!(lines[1].matches("${color1}").count(), 1);
    }

    #[test]
    fn test_month_label_on_week_containing_the_first() {
        // Window starting 2026-08-24 crosses into September in week 2
        // (Aug 31 - Sep 6: Sunday is Sep 6, day 6 <= 7).
        let lines = build_grid(date(2026, 8, 24), 6, 1);
        assert!(lines[2].starts_with("${color1}Sep${color0} "));
        // Exactly one label per month boundary in the window (Sep and Oct).
        let labelled: Vec<_> = lines[1..]
            .iter()
            .filter(|l| !l.starts_with("    "))
            .collect();
        assert_eq!(labelled.len(), 2);
        assert!(labelled[1].starts_with("${color1}Oct${color0} "));
    }

    #[test]
    fn test_unlabelled_rows_get_blank_gutter() {
        let lines = build_grid(date(2026, 8, 24), 2, 1);
        assert!(lines[1].starts_with("    "));
    }

    #[test]
    fn test_year_boundary() {
        // 2026-12-28 is a Monday; the next row starts the week of Jan 1 2027.
        let lines = build_grid(date(2026, 12, 28), 2, 1);
        assert!(lines[1].starts_with("${color1}Jan${color0} "));
        assert_eq!(visible(&lines[1]), "Jan 28 29 30 31  1  2  3 ");
        assert_eq!(visible(&lines[2]), "     4  5  6  7  8  9 10 ");
    }
}
