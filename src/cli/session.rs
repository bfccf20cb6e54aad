//! Interactive session: select → load → statistics → raw pages → restart

use tracing::{info, instrument};

use crate::application::services::{self, RawDataPager};
use crate::cli::selector::{ask_until, read, say, select_filters};
use crate::cli::{render, CliResult};
use crate::domain::{Answer, TripTable};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::Terminal;
use crate::infrastructure::InfraResult;

pub const RAW_PROMPT: &str =
    "Would you like to view 5 rows of individual trip data? Enter 'yes' or 'no'.";
pub const MORE_PROMPT: &str = "Would you like to view 5 more rows of data? Enter 'yes' or 'no'.";
pub const YES_NO_RETRY: &str = "Invalid input. Please enter only 'yes' or 'no'.";
pub const NO_MORE_DATA: &str = "No more data to display.";
pub const RESTART_PROMPT: &str = "Would you like to restart? Enter yes or no.";

/// One user session; runs iterations until the user declines to restart.
pub struct Session<'a, T: Terminal> {
    container: &'a ServiceContainer,
    terminal: T,
}

impl<'a, T: Terminal> Session<'a, T> {
    pub fn new(container: &'a ServiceContainer, terminal: T) -> Self {
        Self {
            container,
            terminal,
        }
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Run iterations until the restart answer is anything but "yes".
    pub fn run(&mut self) -> CliResult<()> {
        let mut iteration = 1;
        loop {
            self.run_iteration(iteration)?;
            let answer = read(&mut self.terminal, RESTART_PROMPT)?;
            if Answer::yes_or_else_no(&answer) == Answer::No {
                info!("session finished after {} iteration(s)", iteration);
                return Ok(());
            }
            iteration += 1;
        }
    }

    #[instrument(skip(self))]
    fn run_iteration(&mut self, iteration: usize) -> CliResult<()> {
        let filters = select_filters(&mut self.terminal)?;
        let table = self.container.loader.load(&filters)?;
        info!("{} trips match {}", table.len(), filters);

        self.report(render::time_stats(&services::time_stats(&table)))?;
        self.report(render::station_stats(&services::station_stats(&table)))?;
        self.report(render::duration_stats(&services::duration_stats(&table)))?;
        self.report(render::user_stats(&services::user_stats(&table)))?;

        self.page_raw_data(&table)?;
        Ok(())
    }

    fn report(&mut self, lines: Vec<String>) -> InfraResult<()> {
        for line in lines {
            say(&mut self.terminal, &line)?;
        }
        Ok(())
    }

    /// Show 5-row pages while the user keeps answering "yes".
    fn page_raw_data(&mut self, table: &TripTable) -> InfraResult<()> {
        let mut pager = RawDataPager::new(table);
        let mut prompt = RAW_PROMPT;
        loop {
            match ask_until(&mut self.terminal, prompt, YES_NO_RETRY)? {
                Answer::No => return Ok(()),
                Answer::Yes => {
                    let page = pager.next_page();
                    if !page.rows.is_empty() {
                        say(&mut self.terminal, &render::page(&page, table.schema()))?;
                    }
                    if pager.is_exhausted() {
                        say(&mut self.terminal, NO_MORE_DATA)?;
                        return Ok(());
                    }
                    prompt = MORE_PROMPT;
                }
            }
        }
    }
}
