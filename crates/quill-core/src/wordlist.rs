//! Per-language wordlists and the process-wide registry.
//!
//! Each list keeps its canonical BIP-39 index order, which defines the
//! encoding. Reverse lookup goes through a separate ordinal-sorted index,
//! since several standard lists (French, Japanese, both Chinese lists) are
//! not in byte order.

use std::sync::LazyLock;

use crate::constants::WORDLIST_SIZE;
use crate::error::MnemonicError;
use crate::language::Language;

static REGISTRY: LazyLock<WordlistRegistry> = LazyLock::new(WordlistRegistry::load);

/// A single language's 2048-word dictionary.
#[derive(Debug)]
pub struct Wordlist {
    language: Language,
    words: &'static [&'static str; WORDLIST_SIZE],
    /// `(word, index)` pairs ordered by `str::cmp`.
    sorted: Vec<(&'static str, u16)>,
}

impl Wordlist {
    fn new(language: Language) -> Self {
        let words = language.bip39().word_list();
        let mut sorted: Vec<(&'static str, u16)> = words
            .iter()
            .enumerate()
            .map(|(i, w)| (*w, i as u16))
            .collect();
        sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));
        Self {
            language,
            words,
            sorted,
        }
    }

    /// The language of this list.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Word at an 11-bit index.
    ///
    /// Only the low 11 bits of `index` are used.
    pub fn word(&self, index: u16) -> &'static str {
        self.words[usize::from(index) % WORDLIST_SIZE]
    }

    /// Index of `word`, by binary search with ordinal comparison.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.sorted
            .binary_search_by(|(probe, _)| (*probe).cmp(word))
            .ok()
            .map(|pos| self.sorted[pos].1)
    }

    /// Whether `word` belongs to this list.
    pub fn contains(&self, word: &str) -> bool {
        self.index_of(word).is_some()
    }

    /// All words in index order.
    pub fn words(&self) -> &'static [&'static str; WORDLIST_SIZE] {
        self.words
    }
}

/// Immutable registry of every supported wordlist.
///
/// Built once per process; safe to share between threads without locking.
#[derive(Debug)]
pub struct WordlistRegistry {
    lists: Vec<Wordlist>,
}

impl WordlistRegistry {
    fn load() -> Self {
        Self {
            lists: Language::ALL.iter().map(|l| Wordlist::new(*l)).collect(),
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static WordlistRegistry {
        &REGISTRY
    }

    /// Wordlist for `language`.
    pub fn get(&self, language: Language) -> &Wordlist {
        // `lists` is built from `Language::ALL`, so wire index == position.
        &self.lists[usize::from(language.wire_index())]
    }

    /// Index of `word` in the wordlist of `language`.
    pub fn index_of(&self, language: Language, word: &str) -> Option<u16> {
        self.get(language).index_of(word)
    }

    /// Every language whose wordlist contains `word`, in enumeration order.
    pub fn languages_of<'a>(&'a self, word: &'a str) -> impl Iterator<Item = Language> + 'a {
        self.lists
            .iter()
            .filter(move |list| list.contains(word))
            .map(Wordlist::language)
    }

    /// First language whose wordlist contains `word`.
    pub fn language_of(&self, word: &str) -> Result<Language, MnemonicError> {
        self.languages_of(word)
            .next()
            .ok_or(MnemonicError::UnknownLanguage)
    }
}
