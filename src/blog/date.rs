//! Calendar dates attached to posts.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Errors produced while parsing a post date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    Format(String),
    #[error("Date out of range: '{0}'")]
    OutOfRange(String),
}

/// Publication date of a post.
///
/// Field order gives chronological ordering through the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct PostDate {
    year: i32,
    month: u32,
    day: u32,
}

impl PostDate {
    /// Creates a date after checking month and day ranges.
    ///
    /// # Errors
    ///
    /// Returns error if month is outside 1..=12 or day does not exist in
    /// the given month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(DateError::OutOfRange(format!(
                "{:04}-{:02}-{:02}",
                year, month, day
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Parses a strict `YYYY-MM-DD` date.
    ///
    /// # Errors
    ///
    /// Returns error if the string is not in `YYYY-MM-DD` form or names a
    /// day that does not exist.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        let s = s.trim();
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !well_formed {
            return Err(DateError::Format(s.to_string()));
        }

        let field = |range: std::ops::Range<usize>| {
            s[range]
                .parse::<u32>()
                .map_err(|_| DateError::Format(s.to_string()))
        };
        let year = field(0..4)? as i32;
        let month = field(5..7)?;
        let day = field(8..10)?;

        Self::new(year, month, day)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Formats as a long US English date, e.g. "January 15, 2025".
    pub fn format_long(&self) -> String {
        format!(
            "{} {}, {}",
            MONTH_NAMES[(self.month - 1) as usize],
            self.day,
            self.year
        )
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

impl fmt::Display for PostDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for PostDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PostDate {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_valid_date() {
        // Act
        let date = PostDate::parse("2025-01-15").expect("Date should parse");

        // Assert
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 15);
    }

    #[rstest]
    #[case("2025-1-15")]
    #[case("2025/01/15")]
    #[case("15-01-2025")]
    #[case("2025-01-1x")]
    #[case("")]
    #[case("+025-01-15")]
    fn test_parse_rejects_bad_format(#[case] input: &str) {
        assert!(matches!(
            PostDate::parse(input),
            Err(DateError::Format(_))
        ));
    }

    #[rstest]
    #[case("2025-00-10")]
    #[case("2025-13-10")]
    #[case("2025-04-31")]
    #[case("2025-02-29")]
    #[case("1900-02-29")]
    #[case("2025-01-00")]
    fn test_parse_rejects_impossible_days(#[case] input: &str) {
        assert!(matches!(
            PostDate::parse(input),
            Err(DateError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_leap_days_accepted() {
        assert!(PostDate::parse("2024-02-29").is_ok());
        assert!(PostDate::parse("2000-02-29").is_ok());
    }

    #[rstest]
    #[case("2025-01-15", "January 15, 2025")]
    #[case("2024-11-20", "November 20, 2024")]
    #[case("2024-07-05", "July 5, 2024")]
    fn test_format_long(#[case] input: &str, #[case] expected: &str) {
        let date = PostDate::parse(input).expect("Date should parse");
        assert_eq!(date.format_long(), expected);
    }

    #[test]
    fn test_display_is_iso() {
        // Arrange
        let date = PostDate::new(2024, 9, 5).expect("Date should be valid");

        // Act & Assert
        assert_eq!(date.to_string(), "2024-09-05");
    }

    #[test]
    fn test_chronological_ordering() {
        // Arrange
        let older: PostDate = "2024-12-31".parse().expect("Date should parse");
        let newer: PostDate = "2025-01-01".parse().expect("Date should parse");

        // Assert
        assert!(older < newer);
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        assert_eq!(
            PostDate::parse(" 2025-02-10 ").expect("Date should parse"),
            PostDate::new(2025, 2, 10).expect("Date should be valid")
        );
    }
}
