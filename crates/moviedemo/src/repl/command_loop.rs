//! The interactive menu loop.

use std::io::{self, BufRead, Write};
use std::str::FromStr;
use std::sync::Arc;

use moviedemo_core::command::{Command, MAX_CHOICE, MENU};
use moviedemo_core::movie::{Movie, MovieKey, YearRange};
use moviedemo_core::storage::{
    movie_table_spec, provision_table, MovieGateway, TableProvision, DEFAULT_TABLE_NAME,
};
use rust_decimal::Decimal;

use super::console::Console;
use super::session::Session;
use crate::error::{DemoError, Result};
use crate::loader::SampleSource;
use crate::output::pretty::{format_movie, format_movies_between, format_movies_released, framed};
use crate::prelude::*;

/// Where the loop stands after handling one choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    AwaitingChoice,
    Terminated,
}

/// Reads menu choices and dispatches them until the user quits.
pub struct CommandLoop<R, W> {
    gateway: Arc<dyn MovieGateway>,
    samples: Arc<dyn SampleSource>,
    session: Session,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> CommandLoop<R, W> {
    pub fn new(
        gateway: Arc<dyn MovieGateway>,
        samples: Arc<dyn SampleSource>,
        console: Console<R, W>,
    ) -> Self {
        Self {
            gateway,
            samples,
            session: Session::new(),
            console,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Runs until the user quits or input ends.
    ///
    /// Only console failures end the loop with an error; command failures are
    /// reported and the menu is shown again.
    pub async fn run(&mut self) -> io::Result<()> {
        while self.step().await? == LoopState::AwaitingChoice {}
        Ok(())
    }

    /// Shows the menu, reads one choice and handles it.
    pub async fn step(&mut self) -> io::Result<LoopState> {
        self.console.println("")?;
        self.console.println(&p_c(MENU))?;

        let Some(choice) = self.console.prompt("Enter your choice: ")? else {
            tracing::debug!("Input closed, leaving the menu");
            return Ok(LoopState::Terminated);
        };

        let command = Command::parse(&choice);
        tracing::debug!(?command, "Menu choice");

        match command {
            Command::Quit => {
                self.console.println(&p_g("Thank you!!!"))?;
                Ok(LoopState::Terminated)
            }
            Command::Invalid(raw) => {
                tracing::debug!(input = %raw, "Rejected menu choice");
                self.console.println(&framed(&p_r(&format!(
                    "Invalid input choice, select the choices between 1 to {}",
                    MAX_CHOICE
                ))))?;
                Ok(LoopState::AwaitingChoice)
            }
            command => match self.dispatch(&command).await {
                Ok(()) => Ok(LoopState::AwaitingChoice),
                Err(DemoError::InputClosed) => Ok(LoopState::Terminated),
                Err(DemoError::Io(err)) => Err(err),
                Err(err) => {
                    self.console.println(&p_r(&err.to_string()))?;
                    Ok(LoopState::AwaitingChoice)
                }
            },
        }
    }

    async fn dispatch(&mut self, command: &Command) -> Result<()> {
        if !command.needs_table() {
            return match command {
                Command::CreateTable => self.create_table().await,
                // Quit and invalid choices never reach dispatch.
                _ => Ok(()),
            };
        }

        let table_name = self.session.require_table()?.to_string();
        match command {
            Command::LoadSampleData => self.load_sample_data(&table_name).await,
            Command::AddMovie => self.add_movie(&table_name).await,
            Command::GetMovie => self.get_movie(&table_name).await,
            Command::QueryMovies => self.query_movies(&table_name).await,
            Command::ScanMovies => self.scan_movies(&table_name).await,
            _ => Ok(()),
        }
    }

    async fn create_table(&mut self) -> Result<()> {
        let answer = self.ask(&format!(
            "Enter table name to create (Default: {}): ",
            DEFAULT_TABLE_NAME
        ))?;
        let table_name = match answer.trim() {
            "" => DEFAULT_TABLE_NAME.to_string(),
            name => name.to_string(),
        };

        let provision =
            provision_table(self.gateway.as_ref(), &movie_table_spec(&table_name)).await?;
        self.session.select_table(table_name.as_str());

        let message = match provision {
            TableProvision::Created(handle) => {
                p_g(&format!("Table {} created", handle.table_name))
            }
            TableProvision::AlreadyExists { table_name } => {
                p_y(&format!("Table {} already exists", table_name))
            }
        };
        self.console.println(&framed(&message))?;
        Ok(())
    }

    async fn load_sample_data(&mut self, table_name: &str) -> Result<()> {
        self.console.println("Downloading movies data ...")?;
        let movies = self.samples.fetch().await?;
        let summary = self.gateway.batch_write(table_name, &movies).await?;

        self.console.println(&p_g(&format!(
            "Data loaded into {} ({} movies)",
            table_name,
            summary.written()
        )))?;
        if summary.unprocessed > 0 {
            self.console.println(&p_y(&format!(
                "{} of {} movies were not processed",
                summary.unprocessed, summary.submitted
            )))?;
        }
        Ok(())
    }

    async fn add_movie(&mut self, table_name: &str) -> Result<()> {
        let title = self.ask("Enter movie name to add: ")?;
        let year = parse_year(&self.ask("Enter movie year: ")?)?;
        let plot = self.ask("Enter movie plot: ")?;
        let rating = parse_rating(&self.ask("Enter movie rating: ")?)?;

        let movie = Movie::new(year, title, plot, rating);
        self.gateway.put_movie(table_name, &movie).await?;

        self.console
            .println(&framed(&p_g(&format!("Movie {} added", movie.title))))?;
        Ok(())
    }

    async fn get_movie(&mut self, table_name: &str) -> Result<()> {
        let title = self.ask("Enter movie name to get: ")?;
        let year = parse_year(&self.ask("Enter movie year: ")?)?;
        let key = MovieKey::new(year, title);

        let body = match self.gateway.get_movie(table_name, &key).await? {
            Some(movie) => format_movie(&movie),
            None => p_y(&format!("No movie {} found in {}", key, table_name)),
        };
        self.console.println(&framed(&body))?;
        Ok(())
    }

    async fn query_movies(&mut self, table_name: &str) -> Result<()> {
        let year = parse_year(&self.ask("Enter the year to find movies released in: ")?)?;
        let movies = self.gateway.query_by_year(table_name, year).await?;

        self.console.println(&format_movies_released(year, &movies))?;
        Ok(())
    }

    async fn scan_movies(&mut self, table_name: &str) -> Result<()> {
        let first = parse_year(&self.ask("Enter first year: ")?)?;
        let second = parse_year(&self.ask("Enter second year: ")?)?;
        let range = YearRange::new(first, second)?;

        let movies = self.gateway.scan_range(table_name, range).await?;

        self.console.println(&format_movies_between(range, &movies))?;
        Ok(())
    }

    /// Prompts for one value; end of input aborts the command.
    fn ask(&mut self, label: &str) -> Result<String> {
        self.console.prompt(label)?.ok_or(DemoError::InputClosed)
    }
}

fn parse_year(raw: &str) -> Result<i32> {
    raw.trim()
        .parse()
        .map_err(|_| DemoError::InvalidInput(format!("'{}' is not a valid year", raw.trim())))
}

fn parse_rating(raw: &str) -> Result<Decimal> {
    Decimal::from_str(raw.trim())
        .map_err(|_| DemoError::InvalidInput(format!("'{}' is not a valid rating", raw.trim())))
}
