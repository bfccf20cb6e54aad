//! Filter selection: prompt until city, month and day are valid

use std::fmt::Display;
use std::str::FromStr;

use tracing::debug;

use crate::cli::output;
use crate::domain::{City, DayFilter, Filters, MonthFilter};
use crate::infrastructure::traits::Terminal;
use crate::infrastructure::{InfraError, InfraResult};

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";

const CITY_PROMPT: &str = "Would you like to see data for Chicago, New York City, or Washington?";
const CITY_RETRY: &str =
    "Invalid input. Please choose one of the following: Chicago, New York City, or Washington.";
const MONTH_PROMPT: &str =
    "Which month? January, February, March, April, May, June, or 'all' to not filter by month?";
const MONTH_RETRY: &str = "Invalid input. Please choose a valid month or 'all'.";
const DAY_PROMPT: &str = "Which day? Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday, or 'all' to not filter by day?";
const DAY_RETRY: &str = "Invalid input. Please choose a valid day or 'all'.";

/// Read one answer.
pub fn read<T: Terminal + ?Sized>(terminal: &mut T, prompt: &str) -> InfraResult<String> {
    terminal
        .read_line(prompt)
        .map_err(|e| InfraError::terminal("reading an answer", e))
}

/// Write one line.
pub fn say<T: Terminal + ?Sized>(terminal: &mut T, line: &str) -> InfraResult<()> {
    terminal
        .write_line(line)
        .map_err(|e| InfraError::terminal("writing output", e))
}

/// Prompt until the answer parses, showing `retry` after each rejected answer.
pub fn ask_until<V, T>(terminal: &mut T, prompt: &str, retry: &str) -> InfraResult<V>
where
    V: FromStr,
    V::Err: Display,
    T: Terminal + ?Sized,
{
    loop {
        let answer = read(terminal, prompt)?;
        match answer.parse::<V>() {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!("rejected input: {}", e);
                say(terminal, &output::warning(retry))?;
            }
        }
    }
}

/// Collect city, month and day from the user.
pub fn select_filters<T: Terminal + ?Sized>(terminal: &mut T) -> InfraResult<Filters> {
    say(terminal, GREETING)?;

    let city: City = ask_until(terminal, CITY_PROMPT, CITY_RETRY)?;
    let month: MonthFilter = ask_until(terminal, MONTH_PROMPT, MONTH_RETRY)?;
    let day: DayFilter = ask_until(terminal, DAY_PROMPT, DAY_RETRY)?;

    say(terminal, &output::separator())?;

    let filters = Filters { city, month, day };
    debug!("select_filters: {}", filters);
    Ok(filters)
}
