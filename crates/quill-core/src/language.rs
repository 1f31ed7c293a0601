//! Supported wordlist languages.
//!
//! The set is closed and its order is part of the wire format: a language is
//! serialized as its position in [`Language::ALL`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::constants::{IDEOGRAPHIC_SPACE, WORD_SEPARATOR};
use crate::error::MnemonicError;

/// A wordlist language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Language {
    SimplifiedChinese,
    TraditionalChinese,
    #[default]
    English,
    French,
    Italian,
    Japanese,
}

impl Language {
    /// Every language, in wire order.
    pub const ALL: [Language; 6] = [
        Language::SimplifiedChinese,
        Language::TraditionalChinese,
        Language::English,
        Language::French,
        Language::Italian,
        Language::Japanese,
    ];

    /// Canonical name used in the JSON representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use quill_core::language::Language;
    /// assert_eq!(Language::SimplifiedChinese.name(), "simplified chinese");
    /// assert_eq!(Language::English.name(), "english");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            Self::SimplifiedChinese => "simplified chinese",
            Self::TraditionalChinese => "traditional chinese",
            Self::English => "english",
            Self::French => "french",
            Self::Italian => "italian",
            Self::Japanese => "japanese",
        }
    }

    /// Position in the wire enumeration.
    pub fn wire_index(&self) -> u8 {
        match self {
            Self::SimplifiedChinese => 0,
            Self::TraditionalChinese => 1,
            Self::English => 2,
            Self::French => 3,
            Self::Italian => 4,
            Self::Japanese => 5,
        }
    }

    /// Language at a wire enumeration position.
    pub fn from_wire_index(index: u8) -> Result<Self, MnemonicError> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or_else(|| MnemonicError::UnsupportedLanguage(format!("index {index}")))
    }

    /// Separator placed between words of a phrase.
    pub fn separator(&self) -> char {
        match self {
            Self::Japanese => IDEOGRAPHIC_SPACE,
            _ => WORD_SEPARATOR,
        }
    }

    /// The matching language of the `bip39` crate, which supplies word data.
    pub(crate) fn bip39(&self) -> bip39::Language {
        match self {
            Self::SimplifiedChinese => bip39::Language::SimplifiedChinese,
            Self::TraditionalChinese => bip39::Language::TraditionalChinese,
            Self::English => bip39::Language::English,
            Self::French => bip39::Language::French,
            Self::Italian => bip39::Language::Italian,
            Self::Japanese => bip39::Language::Japanese,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = MnemonicError;

    /// Accepts canonical names plus kebab and snake spellings in either word
    /// order (`simplified-chinese`, `chinese_simplified`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c })
            .collect();
        match key.as_str() {
            "simplified chinese" | "chinese simplified" => Ok(Self::SimplifiedChinese),
            "traditional chinese" | "chinese traditional" => Ok(Self::TraditionalChinese),
            "english" => Ok(Self::English),
            "french" => Ok(Self::French),
            "italian" => Ok(Self::Italian),
            "japanese" => Ok(Self::Japanese),
            _ => Err(MnemonicError::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
