// Library interface for advanced-wordle
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod evaluator;
pub mod game_state;
pub mod logging;
pub mod tui;
pub mod word;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::{ValidationError, WordBankError};
pub use evaluator::{Mark, evaluate, is_exact_match, render_marks};
pub use game_state::{
    GameInterface, GameSession, GameStats, Outcome, Phase, Prompt, SessionEvent, game_loop,
};
pub use word::Word;
pub use wordbank::{Tier, WordBank, WordListSource, resolve_source};
