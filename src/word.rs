use std::fmt;

/// A word from the word list, normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    length: usize,
}

impl Word {
    pub fn new(text: &str) -> Self {
        let text = text.trim().to_uppercase();
        let length = text.chars().count();
        Self { text, length }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters, not bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }

    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.text.contains(ch)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_is_uppercased_and_trimmed() {
        let word = Word::new("  crane\r");
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn test_length_counts_characters() {
        let word = Word::new("café");
        assert_eq!(word.len(), 4);
        assert_eq!(word.len(), word.chars().count());
    }

    #[test]
    fn test_display() {
        assert_eq!(Word::new("gate").to_string(), "GATE");
    }
}
