use crate::word::Word;

/// Per-letter classification of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Right letter, right position.
    Exact,
    /// Letter occurs somewhere else in the target.
    Present,
    Absent,
}

impl Mark {
    /// Symbol printed for this mark; `Exact` prints the guessed letter itself.
    #[must_use]
    pub fn symbol(self, letter: char) -> char {
        match self {
            Mark::Exact => letter,
            Mark::Present => '/',
            Mark::Absent => '-',
        }
    }
}

/// Marks each position of `guess` against `target`.
///
/// The caller checks that the lengths match. A letter counts as `Present`
/// whenever it appears anywhere in the target, without regard to how many
/// times it appears: guessing a letter twice that occurs once marks both.
#[must_use]
pub fn evaluate(guess: &str, target: &Word) -> Vec<Mark> {
    guess
        .chars()
        .zip(target.chars())
        .map(|(g, t)| {
            if g == t {
                Mark::Exact
            } else if target.contains(g) {
                Mark::Present
            } else {
                Mark::Absent
            }
        })
        .collect()
}

#[must_use]
pub fn is_exact_match(guess: &str, target: &Word) -> bool {
    guess == target.text()
}

/// `CR/-E` style feedback, space separated: `C R / - E`.
#[must_use]
pub fn render_marks(guess: &str, marks: &[Mark]) -> String {
    guess
        .chars()
        .zip(marks)
        .map(|(ch, mark)| mark.symbol(ch).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The empty row shown when a round starts.
#[must_use]
pub fn render_blank(length: usize) -> String {
    vec!["-"; length].join(" ")
}

#[must_use]
pub fn spell_out(guess: &str) -> String {
    guess
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}
