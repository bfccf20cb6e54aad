//! Domain entities: cities, filters and answers

use std::fmt;
use std::str::FromStr;

use chrono::{Month, Weekday};

use crate::domain::DomainError;

/// Every calendar month, indexed by `Datelike::month0()`.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Months a user can filter by. The data sets only cover the first half year.
pub const FILTER_MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

/// Weekdays in the order they are offered to the user.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Filter keyword that disables month or day filtering.
pub const ALL: &str = "all";

/// Lowercase full month name, e.g. "june".
pub fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "january",
        Month::February => "february",
        Month::March => "march",
        Month::April => "april",
        Month::May => "may",
        Month::June => "june",
        Month::July => "july",
        Month::August => "august",
        Month::September => "september",
        Month::October => "october",
        Month::November => "november",
        Month::December => "december",
    }
}

/// Lowercase full weekday name, e.g. "monday".
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// A city with bikeshare data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lowercase name the user types to select the city.
    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        City::ALL
            .into_iter()
            .find(|city| city.name() == wanted)
            .ok_or_else(|| DomainError::UnknownCity(s.trim().to_string()))
    }
}

/// Month restriction: every month, or exactly one of [`FILTER_MONTHS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    Only(Month),
}

impl MonthFilter {
    pub fn matches(self, month: Month) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(wanted) => wanted == month,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str(ALL),
            MonthFilter::Only(month) => f.write_str(month_name(*month)),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        if wanted == ALL {
            return Ok(MonthFilter::All);
        }
        FILTER_MONTHS
            .into_iter()
            .find(|month| month_name(*month) == wanted)
            .map(MonthFilter::Only)
            .ok_or_else(|| DomainError::UnknownMonth(s.trim().to_string()))
    }
}

/// Weekday restriction: every day, or exactly one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFilter {
    #[default]
    All,
    Only(Weekday),
}

impl DayFilter {
    pub fn matches(self, day: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(wanted) => wanted == day,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str(ALL),
            DayFilter::Only(day) => f.write_str(weekday_name(*day)),
        }
    }
}

impl FromStr for DayFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        if wanted == ALL {
            return Ok(DayFilter::All);
        }
        WEEKDAYS
            .into_iter()
            .find(|day| weekday_name(*day) == wanted)
            .map(DayFilter::Only)
            .ok_or_else(|| DomainError::UnknownDay(s.trim().to_string()))
    }
}

/// The validated selection for one session iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filters {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl fmt::Display for Filters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "city={} month={} day={}", self.city, self.month, self.day)
    }
}

/// Strict yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Lenient reading used for the restart question: only "yes" means yes.
    pub fn yes_or_else_no(input: &str) -> Self {
        input.parse().unwrap_or(Answer::No)
    }
}

impl FromStr for Answer {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "yes" => Ok(Answer::Yes),
            "no" => Ok(Answer::No),
            _ => Err(DomainError::UnknownAnswer(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("chicago", City::Chicago)]
    #[case("New York City", City::NewYorkCity)]
    #[case("  WASHINGTON\n", City::Washington)]
    fn given_known_city_when_parsing_then_matches(#[case] input: &str, #[case] expected: City) {
        assert_eq!(input.parse::<City>().unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("chi")]
    #[case("new york")]
    #[case("boston")]
    fn given_unknown_city_when_parsing_then_rejects(#[case] input: &str) {
        assert!(matches!(input.parse::<City>(), Err(DomainError::UnknownCity(_))));
    }

    #[rstest]
    #[case("all", MonthFilter::All)]
    #[case("January", MonthFilter::Only(Month::January))]
    #[case("june", MonthFilter::Only(Month::June))]
    fn given_valid_month_when_parsing_then_matches(
        #[case] input: &str,
        #[case] expected: MonthFilter,
    ) {
        assert_eq!(input.parse::<MonthFilter>().unwrap(), expected);
    }

    #[rstest]
    #[case("july")]
    #[case("jan")]
    #[case("december")]
    fn given_month_outside_filter_domain_when_parsing_then_rejects(#[case] input: &str) {
        assert!(input.parse::<MonthFilter>().is_err());
    }

    #[rstest]
    #[case("all", DayFilter::All)]
    #[case("Monday", DayFilter::Only(Weekday::Mon))]
    #[case("sunday", DayFilter::Only(Weekday::Sun))]
    fn given_valid_day_when_parsing_then_matches(#[case] input: &str, #[case] expected: DayFilter) {
        assert_eq!(input.parse::<DayFilter>().unwrap(), expected);
    }

    #[test]
    fn given_abbreviated_day_when_parsing_then_rejects() {
        assert!("mon".parse::<DayFilter>().is_err());
    }

    #[test]
    fn given_filter_when_displaying_then_uses_lowercase_names() {
        let filters = Filters {
            city: City::NewYorkCity,
            month: MonthFilter::Only(Month::March),
            day: DayFilter::All,
        };
        assert_eq!(filters.to_string(), "city=new york city month=march day=all");
    }

    #[rstest]
    #[case("yes", Answer::Yes)]
    #[case("YES", Answer::Yes)]
    #[case("no", Answer::No)]
    #[case("maybe", Answer::No)]
    #[case("y", Answer::No)]
    fn given_restart_answer_when_reading_leniently_then_only_yes_restarts(
        #[case] input: &str,
        #[case] expected: Answer,
    ) {
        assert_eq!(Answer::yes_or_else_no(input), expected);
    }

    #[test]
    fn given_unclear_answer_when_parsing_strictly_then_rejects() {
        assert!("y".parse::<Answer>().is_err());
    }
}
