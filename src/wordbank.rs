use crate::error::{ValidationError, WordBankError};
use crate::word::Word;
use log::{info, warn};
use rand::Rng;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordlist.txt");

/// File name looked up in the working directory when no list is given.
pub const LOCAL_WORDLIST: &str = "WordList.txt";

/// Difficulty, defined only by the length of the target word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Easy,
    Normal,
    Hard,
    VeryHard,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Easy, Tier::Normal, Tier::Hard, Tier::VeryHard];

    #[must_use]
    pub fn word_length(self) -> usize {
        match self {
            Tier::Easy => 4,
            Tier::Normal => 5,
            Tier::Hard => 6,
            Tier::VeryHard => 7,
        }
    }

    #[must_use]
    pub fn from_length(length: usize) -> Option<Tier> {
        match length {
            4 => Some(Tier::Easy),
            5 => Some(Tier::Normal),
            6 => Some(Tier::Hard),
            7 => Some(Tier::VeryHard),
            _ => None,
        }
    }

    /// Parses already-normalized (uppercase, trimmed) input.
    pub fn from_input(input: &str) -> Result<Tier, ValidationError> {
        match input {
            "EASY" => Ok(Tier::Easy),
            "NORMAL" => Ok(Tier::Normal),
            "HARD" => Ok(Tier::Hard),
            "VERY HARD" => Ok(Tier::VeryHard),
            other => Err(ValidationError::UnknownDifficulty(other.to_string())),
        }
    }

    fn index(self) -> usize {
        match self {
            Tier::Easy => 0,
            Tier::Normal => 1,
            Tier::Hard => 2,
            Tier::VeryHard => 3,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Easy => "EASY",
            Tier::Normal => "NORMAL",
            Tier::Hard => "HARD",
            Tier::VeryHard => "VERY HARD",
        };
        f.write_str(name)
    }
}

/// Where the word list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListSource {
    File(PathBuf),
    Embedded,
}

impl fmt::Display for WordListSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordListSource::File(path) => write!(f, "{}", path.display()),
            WordListSource::Embedded => f.write_str("built-in word list"),
        }
    }
}

/// `<config dir>/advanced-wordle/wordlist.txt`, if the platform has a config dir.
#[must_use]
pub fn user_wordlist_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| user_wordlist_in(&dir))
}

fn user_wordlist_in(config_dir: &Path) -> PathBuf {
    config_dir.join("advanced-wordle").join("wordlist.txt")
}

/// Picks the word list: an explicit path wins, then `WordList.txt` in the
/// working directory, then the per-user list, then the built-in one.
#[must_use]
pub fn resolve_source(explicit: Option<&Path>) -> WordListSource {
    let config_dir = dirs::config_dir();
    resolve_source_in(explicit, Path::new("."), config_dir.as_deref())
}

/// Same lookup as [`resolve_source`] against the given directories.
#[must_use]
pub fn resolve_source_in(
    explicit: Option<&Path>,
    cwd: &Path,
    config_dir: Option<&Path>,
) -> WordListSource {
    if let Some(path) = explicit {
        return WordListSource::File(path.to_path_buf());
    }
    let local = cwd.join(LOCAL_WORDLIST);
    if local.is_file() {
        return WordListSource::File(local);
    }
    if let Some(path) = config_dir.map(user_wordlist_in)
        && path.is_file()
    {
        return WordListSource::File(path);
    }
    WordListSource::Embedded
}

/// Words bucketed by tier. Built once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    buckets: [Vec<Word>; 4],
}

impl WordBank {
    pub fn load(source: &WordListSource) -> Result<Self, WordBankError> {
        let bank = match source {
            WordListSource::File(path) => Self::load_from_file(path)?,
            WordListSource::Embedded => Self::embedded(),
        };
        for tier in Tier::ALL {
            info!("Loaded {} {} words from {}", bank.len(tier), tier, source);
        }
        Ok(bank)
    }

    #[must_use]
    pub fn embedded() -> Self {
        Self::load_from_str(EMBEDDED_WORDBANK)
    }

    #[must_use]
    pub fn load_from_str(data: &str) -> Self {
        let mut bank = Self::default();
        for line in data.lines() {
            bank.insert(Word::new(line));
        }
        bank
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordBankError> {
        let path = path.as_ref();
        let io_failure = |source| WordBankError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_failure)?;
        let reader = BufReader::new(file);
        let mut bank = Self::default();
        for (number, line) in reader.split(b'\n').enumerate() {
            let bytes = line.map_err(io_failure)?;
            match String::from_utf8(bytes) {
                Ok(text) => bank.insert(Word::new(&text)),
                Err(_) => warn!(
                    "Skipping line {} of {}: not valid UTF-8",
                    number + 1,
                    path.display()
                ),
            }
        }
        Ok(bank)
    }

    /// Words whose length matches no tier are dropped.
    fn insert(&mut self, word: Word) {
        if let Some(tier) = Tier::from_length(word.len()) {
            self.buckets[tier.index()].push(word);
        }
    }

    #[must_use]
    pub fn words(&self, tier: Tier) -> &[Word] {
        &self.buckets[tier.index()]
    }

    #[must_use]
    pub fn len(&self, tier: Tier) -> usize {
        self.buckets[tier.index()].len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Uniform over the whole bucket, last index included.
    pub fn pick_random<R: Rng + ?Sized>(
        &self,
        tier: Tier,
        rng: &mut R,
    ) -> Result<&Word, ValidationError> {
        let bucket = self.words(tier);
        if bucket.is_empty() {
            return Err(ValidationError::EmptyTier(tier));
        }
        Ok(&bucket[rng.random_range(0..bucket.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;
    use std::fs;

    #[test]
    fn test_load_buckets_by_length() {
        let bank = WordBank::load_from_str("gate\ncrane\nplanet\nbalance\nox\nelephants\n");
        assert_eq!(bank.words(Tier::Easy)[0].text(), "GATE");
        assert_eq!(bank.words(Tier::Normal)[0].text(), "CRANE");
        assert_eq!(bank.words(Tier::Hard)[0].text(), "PLANET");
        assert_eq!(bank.words(Tier::VeryHard)[0].text(), "BALANCE");
        assert_eq!(bank.total(), 4);
    }

    #[test]
    fn test_load_keeps_file_order() {
        let bank = WordBank::load_from_str("crane\nslate\nraise\n");
        let texts: Vec<&str> = bank.words(Tier::Normal).iter().map(Word::text).collect();
        assert_eq!(texts, vec!["CRANE", "SLATE", "RAISE"]);
    }

    #[test]
    fn test_load_handles_crlf() {
        let bank = WordBank::load_from_str("gate\r\nbone\r\n");
        assert_eq!(bank.len(Tier::Easy), 2);
    }

    #[test]
    fn test_embedded_has_every_tier() {
        let bank = WordBank::embedded();
        for tier in Tier::ALL {
            assert!(bank.len(tier) > 0, "no words for {tier}");
            assert!(bank.words(tier).iter().all(|w| w.len() == tier.word_length()));
        }
    }

    #[test]
    fn test_load_from_missing_file_is_io_failure() {
        let result = WordBank::load_from_file("/definitely/not/here/WordList.txt");
        assert!(matches!(result, Err(WordBankError::Io { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("advanced_wordle_wordbank_test.txt");
        fs::write(&path, "gate\ncrane\n").unwrap();
        let bank = WordBank::load(&WordListSource::File(path.clone())).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(bank.len(Tier::Easy), 1);
        assert_eq!(bank.len(Tier::Normal), 1);
    }

    /// Fresh `<tmp>/<name>/{cwd,config}` pair for lookup tests.
    fn lookup_dirs(name: &str) -> (PathBuf, PathBuf) {
        let root = std::env::temp_dir().join(format!("advanced_wordle_{name}"));
        let _ = fs::remove_dir_all(&root);
        let cwd = root.join("cwd");
        let config = root.join("config");
        fs::create_dir_all(&cwd).unwrap();
        fs::create_dir_all(config.join("advanced-wordle")).unwrap();
        (cwd, config)
    }

    #[test]
    fn test_resolve_source_prefers_explicit_path() {
        let (cwd, config) = lookup_dirs("explicit");
        fs::write(cwd.join(LOCAL_WORDLIST), "gate\n").unwrap();
        let source = resolve_source_in(Some(Path::new("custom.txt")), &cwd, Some(&config));
        assert_eq!(source, WordListSource::File(PathBuf::from("custom.txt")));
    }

    #[test]
    fn test_resolve_source_local_file_beats_config() {
        let (cwd, config) = lookup_dirs("local");
        fs::write(cwd.join(LOCAL_WORDLIST), "gate\n").unwrap();
        fs::write(user_wordlist_in(&config), "gate\n").unwrap();
        let source = resolve_source_in(None, &cwd, Some(&config));
        assert_eq!(source, WordListSource::File(cwd.join(LOCAL_WORDLIST)));
    }

    #[test]
    fn test_resolve_source_config_beats_embedded() {
        let (cwd, config) = lookup_dirs("config");
        fs::write(user_wordlist_in(&config), "gate\n").unwrap();
        let source = resolve_source_in(None, &cwd, Some(&config));
        assert_eq!(source, WordListSource::File(user_wordlist_in(&config)));
    }

    #[test]
    fn test_resolve_source_falls_back_to_embedded() {
        let (cwd, config) = lookup_dirs("embedded");
        assert_eq!(
            resolve_source_in(None, &cwd, Some(&config)),
            WordListSource::Embedded
        );
        assert_eq!(resolve_source_in(None, &cwd, None), WordListSource::Embedded);
    }

    #[test]
    fn test_load_from_file_skips_invalid_utf8_lines() {
        let path = std::env::temp_dir().join("advanced_wordle_invalid_utf8.txt");
        fs::write(&path, b"gate\ncaf\xe9\ncrane\n").unwrap();
        let bank = WordBank::load_from_file(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(bank.len(Tier::Easy), 1);
        assert_eq!(bank.len(Tier::Normal), 1);
        assert_eq!(bank.total(), 2);
    }

    #[test]
    fn test_tier_from_input() {
        assert_eq!(Tier::from_input("EASY"), Ok(Tier::Easy));
        assert_eq!(Tier::from_input("NORMAL"), Ok(Tier::Normal));
        assert_eq!(Tier::from_input("HARD"), Ok(Tier::Hard));
        assert_eq!(Tier::from_input("VERY HARD"), Ok(Tier::VeryHard));
        assert!(Tier::from_input("VERYHARD").is_err());
        assert!(Tier::from_input("easy").is_err());
    }

    #[test]
    fn test_tier_length_round_trip() {
        for tier in Tier::ALL {
            assert_eq!(Tier::from_length(tier.word_length()), Some(tier));
        }
        assert_eq!(Tier::from_length(3), None);
        assert_eq!(Tier::from_length(8), None);
    }

    #[test]
    fn test_pick_random_reaches_last_index() {
        let bank = WordBank::load_from_str("gate\nbone\nlake\n");
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.insert(bank.pick_random(Tier::Easy, &mut rng).unwrap().text().to_string());
        }
        assert!(seen.contains("LAKE"));
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_pick_random_single_word() {
        let bank = WordBank::load_from_str("crane\n");
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(bank.pick_random(Tier::Normal, &mut rng).unwrap().text(), "CRANE");
    }

    #[test]
    fn test_pick_random_empty_tier() {
        let bank = WordBank::load_from_str("crane\n");
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            bank.pick_random(Tier::Hard, &mut rng),
            Err(ValidationError::EmptyTier(Tier::Hard))
        );
    }
}
