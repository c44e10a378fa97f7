// Integration tests for advanced-wordle
// These drive whole sessions through the line interface and check what the player sees

use advanced_wordle::cli::CliInterface;
use advanced_wordle::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;

const WORDS: &str = "gate\ncrane\nplanet\nbalance\n";

fn play(input: &str) -> (GameStats, String) {
    let bank = WordBank::load_from_str(WORDS);
    let mut rng = StdRng::seed_from_u64(3);
    let mut interface = CliInterface::with_writer(Cursor::new(input.to_string()), Vec::new());
    let stats = game_loop(&bank, &mut interface, &mut rng);
    let output = String::from_utf8(interface.into_writer()).unwrap();
    (stats, output)
}

#[test]
fn test_immediate_stop() {
    let (stats, output) = play("/STOP\n");
    assert_eq!(stats, GameStats::default());
    assert!(output.contains("Welcome to Advanced Wordle!"));
    assert!(output.trim_end().ends_with("Thanks for playing!"));
}

#[test]
fn test_lowercase_stop_while_guessing() {
    let (_, output) = play("normal\n/stop\n");
    assert!(output.contains("- - - - -"));
    assert!(output.contains("Thanks for playing!"));
    assert!(!output.contains("Guess 2 of"));
}

#[test]
fn test_invalid_difficulty_reprompts() {
    let (_, output) = play("medium\neasy\n/STOP\n");
    assert!(output.contains("Incorrect input. Type EASY, NORMAL, HARD, or VERY HARD"));
    assert!(output.contains("Guess 1 of 6: "));
}

#[test]
fn test_feedback_lines_for_wrong_guess() {
    let (_, output) = play("easy\ngone\n/STOP\n");
    assert!(output.contains("G O N E\nG - - E\n"));
    assert!(output.contains("Guess 2 of 6: "));
}

#[test]
fn test_wrong_length_guess_keeps_guess_number() {
    let (_, output) = play("hard\nplan\n/STOP\n");
    assert!(output.contains("Please enter 6 letters"));
    assert_eq!(output.matches("Guess 1 of 6: ").count(), 2);
    assert!(!output.contains("Guess 2 of 6: "));
}

#[test]
fn test_win_adds_guesses_and_returns_to_difficulty() {
    let (stats, output) = play("very hard\nbalcony\nbalance\n/STOP\n");
    assert_eq!(stats.rounds_won, 1);
    assert!(output.contains("B A L C O N Y\nB A L / - / -\n"));
    assert!(output.contains("You win! With 4 attempts left, the answer was: BALANCE"));
    assert!(output.contains("Adding 6 more guesses, you now have 10 attempts to continue!"));
    assert!(!output.contains("Play again?"));
    assert!(output.contains("What you've guessed correctly this round: BALANCE"));
}

#[test]
fn test_carryover_across_two_wins() {
    let (stats, output) = play("easy\ngate\nnormal\ncrane\n/STOP\n");
    assert_eq!(stats.rounds_won, 2);
    assert!(output.contains("you now have 11 attempts"));
    assert!(output.contains("Guess 1 of 11: "));
    assert!(output.contains("you now have 16 attempts"));
    assert!(output.contains("What you've guessed correctly this round: GATE CRANE"));
}

#[test]
fn test_loss_then_no() {
    let input = "easy\nbone\nbone\nbone\nbone\nbone\nbone\nno\n";
    let (stats, output) = play(input);
    assert_eq!(stats.rounds_lost, 1);
    assert!(output.contains("Guess 6 of 6: "));
    assert!(!output.contains("Guess 7 of 6: "));
    assert!(output.contains("Game over! The answer was: GATE"));
    assert!(output.contains("Play again? (YES or NO): "));
    assert!(output.trim_end().ends_with("Thanks for playing!"));
}

#[test]
fn test_loss_then_yes_resets_to_six() {
    let mut input = String::from("easy\ngate\neasy\n");
    for _ in 0..11 {
        input.push_str("bone\n");
    }
    input.push_str("maybe\nyes\nnormal\n/STOP\n");
    let (stats, output) = play(&input);
    assert_eq!(stats.rounds_won, 1);
    assert_eq!(stats.rounds_lost, 1);
    assert!(output.contains("Guess 11 of 11: "));
    assert!(output.contains("Please answer YES or NO"));

    let restart = output.find("Restarting game....").unwrap();
    let report = output
        .find("What you've guessed correctly this round: GATE")
        .unwrap();
    assert!(report < restart);
    assert!(output[restart..].contains("Guess 1 of 6: "));
    // The streak was flushed on restart, so it is not reported again at the end.
    assert_eq!(output.matches("guessed correctly this round").count(), 1);
}

#[test]
fn test_end_of_input_acts_like_stop() {
    let (_, output) = play("easy\ngone\n");
    assert!(output.trim_end().ends_with("Thanks for playing!"));
}

#[test]
fn test_pick_random_covers_whole_bucket() {
    let bank = WordBank::load_from_str("gate\nbone\nlake\nmoon\n");
    let mut rng = StdRng::seed_from_u64(99);
    let last = bank.words(Tier::Easy).last().unwrap().clone();
    let hit_last = (0..500).any(|_| bank.pick_random(Tier::Easy, &mut rng).unwrap() == &last);
    assert!(hit_last);
}

#[test]
fn test_evaluate_properties_on_word_list() {
    let bank = WordBank::embedded();
    for tier in Tier::ALL {
        for word in bank.words(tier).iter().take(25) {
            assert!(evaluate(word.text(), word).iter().all(|m| *m == Mark::Exact));
            assert!(is_exact_match(word.text(), word));
        }
    }
}
