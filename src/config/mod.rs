//! Deployment configuration: site note, search behavior, correction contact.
//!
//! Everything in the configuration is optional. A missing file (when none
//! was explicitly requested), a partial file, or an empty object all
//! degrade to the defaults below — the tool never fails because a knob
//! was left unset.
//!
//! # Example
//!
//! ```no_run
//! use termbridge::config::AppConfig;
//! use std::path::Path;
//!
//! let config = AppConfig::load(Path::new("termbridge.json"))?;
//! println!("{} ({})", config.site_note_title, config.version);
//! # Ok::<(), termbridge::config::ConfigError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::filter::SearchOptions;
use crate::core::script::ScriptMap;

mod error;

pub use error::ConfigError;

/// Default subject line for correction submissions.
const DEFAULT_SUBMIT_SUBJECT: &str = "兩岸用語對照 - 新增/修正詞條";

/// Top-level deployment configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Heading of the site notice shown above the table.
    pub site_note_title: String,

    /// Body text of the site notice.
    pub site_note: String,

    /// Version label for display; empty renders as a placeholder.
    pub version: String,

    /// Simplified→traditional substitution table for query widening.
    pub s2t_map: ScriptMap,

    /// Text-search behavior.
    pub search: SearchConfig,

    /// Correction-submission contact link.
    pub submit: SubmitConfig,
}

/// Text-search knobs.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Match the loose traditional rendering of simplified-script queries.
    pub allow_simp_input: bool,

    /// Queries shorter than this many characters apply no text filter.
    /// Raising it above 1 guards against over-matching single characters.
    pub min_query_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            allow_simp_input: false,
            min_query_len: 1,
        }
    }
}

/// Contact details for the "submit a correction" mailto link.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SubmitConfig {
    /// Recipient address. Empty produces an inert link.
    pub email: String,

    /// Subject line.
    pub subject: String,

    /// Pre-filled message body.
    pub body_template: String,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            email: String::new(),
            subject: DEFAULT_SUBMIT_SUBJECT.to_string(),
            body_template: String::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist and
    /// `ConfigError::Parse` if it isn't valid JSON. Unknown keys and
    /// missing keys are fine; every field has a default.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// The search options this configuration implies.
    pub fn search_options(&self) -> SearchOptions<'_> {
        SearchOptions {
            min_query_len: self.search.min_query_len,
            allow_simp_input: self.search.allow_simp_input,
            script_map: &self.s2t_map,
        }
    }
}
