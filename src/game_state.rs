//! Session state machine and the loop that drives it.
//!
//! A session moves through these phases:
//! - `ChoosingDifficulty` → `Guessing` once a tier is chosen and a word drawn
//! - `Guessing` → `RoundResolved(Win | Loss)` on a correct guess or when guesses run out
//! - `RoundResolved(Win)` → `ChoosingDifficulty`, carrying unused guesses forward
//! - `RoundResolved(Loss)` → `ChoosingReplay`
//! - `ChoosingReplay` → `ChoosingDifficulty` on YES, `Terminated` on NO
//!
//! The abort keyword ends the session from any phase that reads input.

use crate::debug_log;
use crate::error::ValidationError;
use crate::evaluator::{Mark, evaluate, is_exact_match, render_blank, render_marks, spell_out};
use crate::word::Word;
use crate::wordbank::{Tier, WordBank};
use log::info;
use rand::Rng;

pub const ABORT_KEYWORD: &str = "/STOP";
pub const STARTING_GUESSES: i32 = 6;
pub const BONUS_GUESSES: i32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    ChoosingDifficulty,
    Guessing,
    RoundResolved(Outcome),
    ChoosingReplay,
    Terminated,
}

/// What the session is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Difficulty,
    Guess { number: i32, total: i32 },
    Replay,
}

/// Everything a front end needs to show, produced by session transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Welcome,
    RoundStarted { tier: Tier, length: usize },
    Rejected(ValidationError),
    Feedback { guess: String, marks: Vec<Mark> },
    Won { word: Word, attempts_left: i32 },
    GuessesAdded { total: i32 },
    Lost { word: Word },
    StreakReport(Vec<Word>),
    Restarting,
    Farewell(GameStats),
}

impl SessionEvent {
    /// Plain-text rendering, one entry per output line.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        match self {
            SessionEvent::Welcome => vec![format!(
                "Welcome to Advanced Wordle! Remember to type {ABORT_KEYWORD} at any point to end the game"
            )],
            SessionEvent::RoundStarted { length, .. } => vec![render_blank(*length)],
            SessionEvent::Rejected(err) => vec![err.to_string()],
            SessionEvent::Feedback { guess, marks } => {
                vec![spell_out(guess), render_marks(guess, marks)]
            }
            SessionEvent::Won {
                word,
                attempts_left,
            } => vec![format!(
                "You win! With {attempts_left} attempts left, the answer was: {word}"
            )],
            SessionEvent::GuessesAdded { total } => vec![format!(
                "Adding {BONUS_GUESSES} more guesses, you now have {total} attempts to continue!"
            )],
            SessionEvent::Lost { word } => vec![format!("Game over! The answer was: {word}")],
            SessionEvent::StreakReport(words) => {
                let words: Vec<&str> = words.iter().map(Word::text).collect();
                vec![format!(
                    "What you've guessed correctly this round: {}",
                    words.join(" ")
                )]
            }
            SessionEvent::Restarting => vec!["Restarting game....".to_string()],
            SessionEvent::Farewell(stats) => vec![
                format!(
                    "Rounds won: {}, rounds lost: {}",
                    stats.rounds_won, stats.rounds_lost
                ),
                "Thanks for playing!".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameStats {
    pub rounds_won: u32,
    pub rounds_lost: u32,
}

#[derive(Debug)]
pub struct GameSession<'a> {
    bank: &'a WordBank,
    phase: Phase,
    guesses_remaining: i32,
    current_guess: i32,
    target: Option<Word>,
    solved_this_streak: Vec<Word>,
    stats: GameStats,
}

impl<'a> GameSession<'a> {
    #[must_use]
    pub fn new(bank: &'a WordBank) -> Self {
        Self {
            bank,
            phase: Phase::ChoosingDifficulty,
            guesses_remaining: STARTING_GUESSES,
            current_guess: 1,
            target: None,
            solved_this_streak: Vec::new(),
            stats: GameStats::default(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Terminated
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> i32 {
        self.guesses_remaining
    }

    #[must_use]
    pub fn current_guess(&self) -> i32 {
        self.current_guess
    }

    #[must_use]
    pub fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }

    #[must_use]
    pub fn solved_this_streak(&self) -> &[Word] {
        &self.solved_this_streak
    }

    #[must_use]
    pub fn stats(&self) -> GameStats {
        self.stats
    }

    /// `None` when the session needs `advance` instead of input, or has ended.
    #[must_use]
    pub fn prompt(&self) -> Option<Prompt> {
        match self.phase {
            Phase::ChoosingDifficulty => Some(Prompt::Difficulty),
            Phase::Guessing => Some(Prompt::Guess {
                number: self.current_guess,
                total: self.guesses_remaining,
            }),
            Phase::ChoosingReplay => Some(Prompt::Replay),
            Phase::RoundResolved(_) | Phase::Terminated => None,
        }
    }

    /// Applies one line of user input to the current phase.
    pub fn handle_input<R: Rng + ?Sized>(&mut self, raw: &str, rng: &mut R) -> Vec<SessionEvent> {
        let input = raw.trim().to_uppercase();
        if input == ABORT_KEYWORD && self.prompt().is_some() {
            info!("Abort keyword received in {:?}", self.phase);
            return self.abort();
        }
        match self.phase {
            Phase::ChoosingDifficulty => self.choose_difficulty(&input, rng),
            Phase::Guessing => self.guess(&input),
            Phase::ChoosingReplay => self.choose_replay(&input),
            Phase::RoundResolved(_) | Phase::Terminated => Vec::new(),
        }
    }

    /// Moves a resolved round on to the next phase.
    pub fn advance(&mut self) -> Vec<SessionEvent> {
        match self.phase {
            Phase::RoundResolved(Outcome::Win) => {
                // Unused guesses roll forward on top of the bonus.
                self.guesses_remaining =
                    self.guesses_remaining - self.current_guess + BONUS_GUESSES;
                self.target = None;
                self.phase = Phase::ChoosingDifficulty;
                info!("Carrying over into {} guesses", self.guesses_remaining);
                vec![SessionEvent::GuessesAdded {
                    total: self.guesses_remaining,
                }]
            }
            Phase::RoundResolved(Outcome::Loss) => {
                self.phase = Phase::ChoosingReplay;
                match self.target.take() {
                    Some(word) => vec![SessionEvent::Lost { word }],
                    None => Vec::new(),
                }
            }
            _ => Vec::new(),
        }
    }

    /// Ends the session, reporting whatever is left of the streak.
    pub fn abort(&mut self) -> Vec<SessionEvent> {
        if self.phase == Phase::Terminated {
            return Vec::new();
        }
        self.phase = Phase::Terminated;
        self.target = None;
        let mut events = Vec::new();
        events.extend(self.flush_streak());
        events.push(SessionEvent::Farewell(self.stats));
        events
    }

    fn choose_difficulty<R: Rng + ?Sized>(
        &mut self,
        input: &str,
        rng: &mut R,
    ) -> Vec<SessionEvent> {
        let bank = self.bank;
        let drawn = Tier::from_input(input)
            .and_then(|tier| bank.pick_random(tier, rng).map(|word| (tier, word)));
        match drawn {
            Ok((tier, word)) => {
                info!("Starting {tier} round");
                debug_log!("Target word: {}", word);
                let length = word.len();
                self.target = Some(word.clone());
                self.current_guess = 1;
                self.phase = Phase::Guessing;
                vec![SessionEvent::RoundStarted { tier, length }]
            }
            Err(err) => vec![SessionEvent::Rejected(err)],
        }
    }

    fn guess(&mut self, input: &str) -> Vec<SessionEvent> {
        let Some(target) = self.target.clone() else {
            self.phase = Phase::ChoosingDifficulty;
            return Vec::new();
        };

        if is_exact_match(input, &target) {
            info!("Solved on guess {}", self.current_guess);
            self.stats.rounds_won += 1;
            self.solved_this_streak.push(target.clone());
            self.phase = Phase::RoundResolved(Outcome::Win);
            return vec![SessionEvent::Won {
                word: target,
                attempts_left: self.guesses_remaining - self.current_guess,
            }];
        }

        let actual = input.chars().count();
        if actual != target.len() {
            return vec![SessionEvent::Rejected(ValidationError::WrongLength {
                expected: target.len(),
                actual,
            })];
        }

        let marks = evaluate(input, &target);
        self.current_guess += 1;
        if self.current_guess > self.guesses_remaining {
            info!("Out of guesses");
            self.stats.rounds_lost += 1;
            self.phase = Phase::RoundResolved(Outcome::Loss);
        }
        vec![SessionEvent::Feedback {
            guess: input.to_string(),
            marks,
        }]
    }

    fn choose_replay(&mut self, input: &str) -> Vec<SessionEvent> {
        match input {
            "YES" => {
                let mut events = self.flush_streak();
                events.push(SessionEvent::Restarting);
                self.guesses_remaining = STARTING_GUESSES;
                self.phase = Phase::ChoosingDifficulty;
                events
            }
            "NO" => self.abort(),
            other => vec![SessionEvent::Rejected(
                ValidationError::UnknownReplayAnswer(other.to_string()),
            )],
        }
    }

    fn flush_streak(&mut self) -> Vec<SessionEvent> {
        if self.solved_this_streak.is_empty() {
            Vec::new()
        } else {
            vec![SessionEvent::StreakReport(std::mem::take(
                &mut self.solved_this_streak,
            ))]
        }
    }
}

/// Front end seam: the terminal line interface and the TUI both implement this.
pub trait GameInterface {
    /// Reads one line for `prompt`. `None` means the input is closed.
    fn read_input(&mut self, prompt: &Prompt) -> Option<String>;

    fn display(&mut self, event: &SessionEvent);
}

/// Runs a session to completion against `interface`.
pub fn game_loop<I, R>(bank: &WordBank, interface: &mut I, rng: &mut R) -> GameStats
where
    I: GameInterface + ?Sized,
    R: Rng + ?Sized,
{
    let mut session = GameSession::new(bank);
    interface.display(&SessionEvent::Welcome);

    while session.is_active() {
        let events = match session.prompt() {
            Some(prompt) => match interface.read_input(&prompt) {
                Some(line) => session.handle_input(&line, rng),
                None => {
                    info!("Input closed, ending session");
                    session.abort()
                }
            },
            None => session.advance(),
        };
        for event in &events {
            interface.display(event);
        }
    }

    session.stats()
}
