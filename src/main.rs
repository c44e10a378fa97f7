use advanced_wordle::cli::{CliInterface, parse_cli};
use advanced_wordle::logging::{default_log_path, init_logging};
use advanced_wordle::tui::TuiInterface;
use advanced_wordle::{GameInterface, WordBank, game_loop, resolve_source};
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

fn main() {
    let cli = parse_cli();

    // The TUI owns the screen, so its logs always go to a file.
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| if cli.tui { default_log_path() } else { None });
    if let Err(e) = init_logging(cli.verbose, log_file.as_deref()) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let source = resolve_source(cli.wordbank_path.as_deref());
    let bank = match WordBank::load(&source) {
        Ok(bank) => bank,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            return;
        }
    };
    info!("Word list ready: {} words from {}", bank.total(), source);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut interface: Box<dyn GameInterface> = if cli.tui {
        match TuiInterface::new() {
            Ok(tui) => Box::new(tui),
            Err(e) => {
                eprintln!("Failed to start the terminal interface: {e}");
                return;
            }
        }
    } else {
        Box::new(CliInterface::new(io::stdin().lock()))
    };

    let stats = game_loop(&bank, interface.as_mut(), &mut rng);
    info!(
        "Session over: {} won, {} lost",
        stats.rounds_won, stats.rounds_lost
    );
}
