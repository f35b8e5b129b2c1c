//! REPL commands
//!
//! The command table and the session state the commands act on.

use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

use crate::api::PokeApi;
use crate::error::Result;
use crate::models::Pagination;
use crate::pokedex::Pokedex;

use super::clean_input;

// == Command ==
/// Every command the REPL understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    Map,
    Mapb,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

impl Command {
    /// All commands in the order `help` lists them.
    pub const ALL: [Command; 8] = [
        Command::Help,
        Command::Exit,
        Command::Map,
        Command::Mapb,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
    ];

    pub fn parse(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == word)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Exit => "exit",
            Command::Help => "help",
            Command::Map => "map",
            Command::Mapb => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::Exit => "Exit the Pokedex",
            Command::Help => "Displays a help message",
            Command::Map => "Displays the next page of 20 location areas in the Pokemon world",
            Command::Mapb => "Displays the previous page of 20 location areas in the Pokemon world",
            Command::Explore => "Takes a location area and lists all the Pokemon found there",
            Command::Catch => "Takes a Pokemon name and attempts to catch it",
            Command::Inspect => "Shows details of a caught Pokemon",
            Command::Pokedex => "Lists every Pokemon you have caught",
        }
    }
}

/// What the loop should do after a line is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

// == Session ==
/// State carried between commands: API client, paging cursor and catches.
#[derive(Debug)]
pub struct Session {
    api: PokeApi,
    pokedex: Pokedex,
    pagination: Pagination,
    catch_difficulty: u32,
    rng: StdRng,
}

impl Session {
    pub fn new(api: PokeApi, catch_difficulty: u32) -> Self {
        Self {
            api,
            pokedex: Pokedex::new(),
            pagination: Pagination::default(),
            catch_difficulty,
            rng: StdRng::from_entropy(),
        }
    }

    /// Replaces the catch RNG with a seeded one.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn api(&self) -> &PokeApi {
        &self.api
    }

    /// Consumes the session, returning the client so its cache can be shut down.
    pub fn into_api(self) -> PokeApi {
        self.api
    }

    /// Cleans and dispatches one line of input.
    ///
    /// Command failures are reported on `out` and do not end the session;
    /// only failures to write `out` are returned as errors.
    pub async fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let words = clean_input(line);
        let Some((first, args)) = words.split_first() else {
            return Ok(Flow::Continue);
        };

        let Some(command) = Command::parse(first) else {
            writeln!(out, "Unknown command")?;
            return Ok(Flow::Continue);
        };

        match self.execute(command, args, out).await {
            Ok(flow) => Ok(flow),
            Err(err) => {
                warn!(command = command.name(), error = %err, "Command failed");
                writeln!(out, "Failed to execute command: {}", err)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Runs `command` with its arguments.
    pub async fn execute<W: Write>(
        &mut self,
        command: Command,
        args: &[String],
        out: &mut W,
    ) -> Result<Flow> {
        match command {
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Help => self.help(out)?,
            Command::Map => self.map(out).await?,
            Command::Mapb => self.mapb(out).await?,
            Command::Explore => self.explore(args, out).await?,
            Command::Catch => self.catch(args, out).await?,
            Command::Inspect => self.inspect(args, out)?,
            Command::Pokedex => self.list_pokedex(out)?,
        }
        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for command in Command::ALL {
            writeln!(out, "{}: {}", command.name(), command.description())?;
        }
        Ok(())
    }

    async fn map<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.pagination.next.is_none() && self.pagination.previous.is_some() {
            writeln!(out, "you're on the last page")?;
            return Ok(());
        }

        let next = self.pagination.next.clone();
        self.show_areas(next.as_deref(), out).await
    }

    async fn mapb<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(previous) = self.pagination.previous.clone() else {
            writeln!(out, "you're on the first page")?;
            return Ok(());
        };

        self.show_areas(Some(&previous), out).await
    }

    async fn show_areas<W: Write>(&mut self, page: Option<&str>, out: &mut W) -> Result<()> {
        let (areas, pagination) = self.api.retrieve_areas(page).await?;
        self.pagination = pagination;

        for area in areas {
            writeln!(out, "{}", area.name)?;
        }
        Ok(())
    }

    async fn explore<W: Write>(&mut self, args: &[String], out: &mut W) -> Result<()> {
        let Some(area) = args.first() else {
            writeln!(out, "You didn't provide any areas to explore.")?;
            return Ok(());
        };

        writeln!(out, "Exploring {}...", area)?;
        let pokemon = self.api.retrieve_pokemon_in_area(area).await?;

        writeln!(out, "Found Pokemon:")?;
        for p in pokemon {
            writeln!(out, " - {}", p.name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, args: &[String], out: &mut W) -> Result<()> {
        let Some(name) = args.first() else {
            writeln!(out, "You didn't provide any pokemon to catch")?;
            return Ok(());
        };

        writeln!(out, "Throwing a Pokeball at {}...", name)?;
        let pokemon = self.api.get_pokemon_details(name).await?;

        // Roll in [0, base_experience); zero experience is a guaranteed catch
        let roll = if pokemon.base_experience == 0 {
            0
        } else {
            self.rng.gen_range(0..pokemon.base_experience)
        };

        if roll > self.catch_difficulty {
            writeln!(out, "{} escaped!", name)?;
            return Ok(());
        }

        writeln!(out, "{} was caught!", name)?;
        writeln!(out, "You may now inspect it with the inspect command.")?;
        self.pokedex.add(pokemon);
        Ok(())
    }

    fn inspect<W: Write>(&self, args: &[String], out: &mut W) -> Result<()> {
        let Some(name) = args.first() else {
            writeln!(out, "You didn't provide pokemon name")?;
            return Ok(());
        };

        let Some(caught) = self.pokedex.get(name) else {
            writeln!(out, "you have not caught that pokemon")?;
            return Ok(());
        };

        let pokemon = &caught.pokemon;
        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  -{}: {}", stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  - {}", kind)?;
        }
        writeln!(out, "Caught: {}", caught.caught_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
        Ok(())
    }

    fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.pokedex.is_empty() {
            writeln!(out, "Your Pokedex is empty")?;
            return Ok(());
        }

        writeln!(out, "Your Pokedex:")?;
        for name in self.pokedex.names() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }
}
