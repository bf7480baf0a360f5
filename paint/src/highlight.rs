//! Syntax highlighting for the `highlighted-code` element.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// Grammar used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "gleam";

/// How code is highlighted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HighlightOptions {
    pub language: String,
    /// Keep going past syntax the grammar does not understand.
    pub ignore_illegals: bool,
}

impl HighlightOptions {
    pub fn new(language: impl Into<String>) -> HighlightOptions {
        HighlightOptions {
            language: language.into(),
            ignore_illegals: true,
        }
    }

    pub fn set_ignore_illegals(&mut self, ignore_illegals: bool) {
        self.ignore_illegals = ignore_illegals;
    }
}

impl Default for HighlightOptions {
    fn default() -> Self {
        HighlightOptions::new(DEFAULT_LANGUAGE)
    }
}

/// Something that turns source code into highlighted HTML.
pub trait Highlighter {
    fn highlight(&self, code: &str, options: &HighlightOptions) -> Result<String, Error>;
}

/// A highlighter that only escapes the code, for when no grammar is available.
#[derive(Clone, Copy, Debug, Default)]
pub struct EscapeHighlighter;

impl Highlighter for EscapeHighlighter {
    fn highlight(&self, code: &str, _options: &HighlightOptions) -> Result<String, Error> {
        Ok(escape_html(code))
    }
}

/// Escape text for use as HTML element content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

/// A block of code that is re-highlighted whenever its `code` attribute changes.
pub struct HighlightedCode<H> {
    highlighter: H,
    options: HighlightOptions,
    html: String,
}

impl<H: Highlighter> HighlightedCode<H> {
    pub fn new(highlighter: H, options: HighlightOptions) -> HighlightedCode<H> {
        HighlightedCode {
            highlighter,
            options,
            html: String::new(),
        }
    }

    pub fn options(&self) -> &HighlightOptions {
        &self.options
    }

    /// The most recently rendered HTML.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Handle an attribute change.
    ///
    /// Returns the new HTML if `name` is `code`, `None` for any other
    /// attribute. On error the previous rendering is kept.
    pub fn attribute_changed(&mut self, name: &str, value: &str) -> Result<Option<&str>, Error> {
        if name != "code" {
            return Ok(None);
        }
        self.html = self.highlighter.highlight(value, &self.options)?;
        Ok(Some(&self.html))
    }
}
