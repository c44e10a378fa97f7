use crate::game_state::{GameInterface, Prompt, SessionEvent};
use clap::Parser;
use log::warn;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Advanced Wordle: guess 4 to 7 letter words, carrying unused guesses between rounds
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Play in the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Seed for word selection, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Append log output to this file instead of stderr
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub const DIFFICULTY_MENU: &str =
    "EASY - 4 letters, NORMAL - 5 letters, HARD - 6 letters, or VERY HARD - 7 letters";

/// Prompt text, without a trailing newline so input follows on the same line.
#[must_use]
pub fn prompt_text(prompt: &Prompt) -> String {
    match prompt {
        Prompt::Difficulty => "Choose difficulty: ".to_string(),
        Prompt::Guess { number, total } => format!("Guess {number} of {total}: "),
        Prompt::Replay => "Play again? (YES or NO): ".to_string(),
    }
}

/// Line-oriented front end over any reader and writer.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead> CliInterface<R, io::Stdout> {
    pub fn new(reader: R) -> Self {
        Self::with_writer(reader, io::stdout())
    }
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn with_writer(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_prompt(&mut self, prompt: &Prompt) -> io::Result<()> {
        if *prompt == Prompt::Difficulty {
            writeln!(self.writer, "{DIFFICULTY_MENU}")?;
        }
        write!(self.writer, "{}", prompt_text(prompt))?;
        self.writer.flush()
    }

    fn write_event(&mut self, event: &SessionEvent) -> io::Result<()> {
        if *event == SessionEvent::Welcome {
            writeln!(self.writer)?;
        }
        for line in event.lines() {
            writeln!(self.writer, "{line}")?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn read_input(&mut self, prompt: &Prompt) -> Option<String> {
        if let Err(e) = self.write_prompt(prompt) {
            warn!("Failed to write prompt: {e}");
        }
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(input),
            Err(e) => {
                warn!("Failed to read input: {e}");
                None
            }
        }
    }

    fn display(&mut self, event: &SessionEvent) {
        if let Err(e) = self.write_event(event) {
            warn!("Failed to write output: {e}");
        }
    }
}
