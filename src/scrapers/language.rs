//! Language hints for article extraction.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The language an article is expected to be written in.
///
/// The hint selects the stopword list used to find the article body. The
/// GermanFakeNC dataset is German, so that is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
pub enum Language {
    /// German (`de`).
    #[default]
    #[value(name = "de", alias = "german")]
    #[serde(rename = "de", alias = "german")]
    German,
    /// English (`en`).
    #[value(name = "en", alias = "english")]
    #[serde(rename = "en", alias = "english")]
    English,
}

impl Language {
    /// ISO 639-1 code of the language.
    pub fn code(self) -> &'static str {
        match self {
            Language::German => "de",
            Language::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
