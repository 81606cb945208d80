//! `{:key}` string templates for wrappers and URL paths

use rustc_hash::FxHashMap;

const OPEN: &str = "{:";
const CLOSE: char = '}';

/// Template with `{:name}` placeholders.
///
/// Placeholders without a value are left in the output untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringTemplate {
    source: String,
}

impl StringTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Names of every placeholder, in order of appearance
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut rest = self.source.as_str();
        while let Some(open) = rest.find(OPEN) {
            let after = &rest[open + OPEN.len()..];
            match after.find(CLOSE) {
                Some(close) => {
                    names.push(&after[..close]);
                    rest = &after[close + 1..];
                }
                None => break,
            }
        }
        names
    }

    /// Substitute `vars` into the template
    pub fn render(&self, vars: &FxHashMap<&str, String>) -> String {
        let mut out = String::with_capacity(self.source.len());
        let mut rest = self.source.as_str();

        while let Some(open) = rest.find(OPEN) {
            out.push_str(&rest[..open]);
            let after = &rest[open + OPEN.len()..];
            let Some(close) = after.find(CLOSE) else {
                out.push_str(&rest[open..]);
                return out;
            };
            let name = &after[..close];
            match vars.get(name) {
                Some(value) => out.push_str(value),
                None => out.push_str(&rest[open..open + OPEN.len() + close + 1]),
            }
            rest = &after[close + 1..];
        }

        out.push_str(rest);
        out
    }

    /// Substitute a single placeholder
    pub fn render_one(&self, name: &str, value: impl Into<String>) -> String {
        let mut vars = FxHashMap::default();
        vars.insert(name, value.into());
        self.render(&vars)
    }
}
