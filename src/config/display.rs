//! Display configuration for the pagination control

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::window::{LinkKind, DEFAULT_MAX_NUMBERS};

/// Wrapper template used when none is configured
pub const DEFAULT_WRAPPER: &str = "<ul>{:content}</ul>";

/// Every recognized option of the pagination control.
///
/// Text and tag values are emitted verbatim, so they may contain markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayConfig {
    /// Include the "<< First" and "Last >>" links
    pub show_first_last: bool,
    /// Include the "< Prev" and "Next >" links
    pub show_prev_next: bool,
    /// Include the numbered page links
    pub show_numbers: bool,
    /// Upper bound on the number of numbered links
    pub max_numbers: usize,

    pub first_text: String,
    pub first_text_disabled: String,
    pub prev_text: String,
    pub prev_text_disabled: String,
    pub next_text: String,
    pub next_text_disabled: String,
    pub last_text: String,
    pub last_text_disabled: String,

    /// Opening tag around an ordinary link
    pub open_tag: String,
    /// Opening tag around the current page's number
    pub active_open_tag: String,
    pub close_tag: String,
    /// Template wrapping the whole control; `{:content}` receives the links
    pub wrapper: String,

    /// Route overrides; empty values fall back to the request context
    pub library: Option<String>,
    pub controller: String,
    pub action: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_first_last: true,
            show_prev_next: true,
            show_numbers: true,
            max_numbers: DEFAULT_MAX_NUMBERS,
            first_text: "<< First".to_string(),
            first_text_disabled: String::new(),
            prev_text: "< Prev".to_string(),
            prev_text_disabled: String::new(),
            next_text: "Next >".to_string(),
            next_text_disabled: String::new(),
            last_text: "Last >>".to_string(),
            last_text_disabled: String::new(),
            open_tag: "<li>".to_string(),
            active_open_tag: r#"<li class="active">"#.to_string(),
            close_tag: "</li>".to_string(),
            wrapper: DEFAULT_WRAPPER.to_string(),
            library: None,
            controller: String::new(),
            action: String::new(),
        }
    }
}

impl DisplayConfig {
    /// Load a configuration from JSON; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Link text for a navigation control in the given state.
    /// Numbered links are labelled with their page and have no configured text.
    pub fn text_for(&self, kind: LinkKind, enabled: bool) -> &str {
        match (kind, enabled) {
            (LinkKind::First, true) => &self.first_text,
            (LinkKind::First, false) => &self.first_text_disabled,
            (LinkKind::Prev, true) => &self.prev_text,
            (LinkKind::Prev, false) => &self.prev_text_disabled,
            (LinkKind::Next, true) => &self.next_text,
            (LinkKind::Next, false) => &self.next_text_disabled,
            (LinkKind::Last, true) => &self.last_text,
            (LinkKind::Last, false) => &self.last_text_disabled,
            (LinkKind::Number, _) => "",
        }
    }

    /// Opening tag for a link, picking the active variant for the current page
    pub fn open_tag_for(&self, is_active: bool) -> &str {
        if is_active {
            &self.active_open_tag
        } else {
            &self.open_tag
        }
    }
}
