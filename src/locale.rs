//! Output language for generated text and markup

use serde::{Deserialize, Serialize};

/// Language used for the search header, demo-mode notice, prompt and slide markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    /// Value for the `lang` attribute of the rendered document.
    pub fn html_lang(&self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::En => "en",
        }
    }
}
