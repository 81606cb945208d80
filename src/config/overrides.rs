//! Partial configuration merged onto a base `DisplayConfig`

use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;
use crate::error::Result;

/// A `DisplayConfig` with every field optional.
///
/// Absent fields leave the base value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayOverrides {
    pub show_first_last: Option<bool>,
    pub show_prev_next: Option<bool>,
    pub show_numbers: Option<bool>,
    pub max_numbers: Option<usize>,
    pub first_text: Option<String>,
    pub first_text_disabled: Option<String>,
    pub prev_text: Option<String>,
    pub prev_text_disabled: Option<String>,
    pub next_text: Option<String>,
    pub next_text_disabled: Option<String>,
    pub last_text: Option<String>,
    pub last_text_disabled: Option<String>,
    pub open_tag: Option<String>,
    pub active_open_tag: Option<String>,
    pub close_tag: Option<String>,
    pub wrapper: Option<String>,
    pub library: Option<String>,
    pub controller: Option<String>,
    pub action: Option<String>,
}

macro_rules! merge_fields {
    ($from:expr, $into:expr; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = &$from.$field {
                $into.$field = value.clone();
            }
        )+
    };
}

impl DisplayOverrides {
    /// Parse overrides from JSON using the same keys as `DisplayConfig`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Write every set field into `config`
    pub fn merge_into(&self, config: &mut DisplayConfig) {
        merge_fields!(self, config;
            show_first_last,
            show_prev_next,
            show_numbers,
            max_numbers,
            first_text,
            first_text_disabled,
            prev_text,
            prev_text_disabled,
            next_text,
            next_text_disabled,
            last_text,
            last_text_disabled,
            open_tag,
            active_open_tag,
            close_tag,
            wrapper,
            controller,
            action,
        );
        if let Some(library) = &self.library {
            config.library = Some(library.clone()).filter(|l| !l.is_empty());
        }
    }

    /// A copy of `base` with these overrides applied
    pub fn apply(&self, base: &DisplayConfig) -> DisplayConfig {
        let mut config = base.clone();
        self.merge_into(&mut config);
        config
    }
}
