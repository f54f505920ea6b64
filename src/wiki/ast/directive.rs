//! Directive element
//!
//!     A directive is a bracketed block dispatched by name to a generator (`table`,
//!     `navbox`, `file`) or to a user template from the template store.
//!
//! Syntax
//!
//!     "[" <name> <body>
//!     "]"
//!
//!     The body runs from after the name to the first `]` in the captured slice.
//!     Each body line is read on its own:
//!         key=value       a parameter, split once on the first `=`
//!         a\\b\\c         a table row (only when the line has no `=`)
//!     Anything else is ignored.
//!
//!     A directive may also sit on one line when no closing line follows:
//!         [file name=report.pdf]

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Separator between table cells inside a directive body
pub const ROW_SEPARATOR: &str = "\\\\";

/// A parsed bracketed directive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Directive {
    pub name: String,
    pub params: Params,
    /// The captured source slice, brackets included
    pub source: String,
    /// Source line indices covered by the directive
    pub lines: Range<usize>,
}

impl Directive {
    pub fn new(name: impl Into<String>, params: Params, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params,
            source: source.into(),
            lines: 0..0,
        }
    }

    pub fn spanning(mut self, lines: Range<usize>) -> Self {
        self.lines = lines;
        self
    }

    /// The captured slice with its outer brackets removed, used when no generator
    /// or template claims the directive name.
    pub fn fallback_text(&self) -> String {
        let text = self.source.trim_end();
        let text = text.strip_prefix('[').unwrap_or(text);
        let text = text.strip_suffix(']').unwrap_or(text);
        text.trim_end().to_string()
    }
}

/// Parameters and table rows collected from a directive body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Params {
    named: Vec<(String, String)>,
    rows: Vec<Vec<String>>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a directive body, one parameter or row per line
    pub fn parse(body: &str) -> Self {
        let mut params = Params::new();
        for line in body.split('\n') {
            if let Some((key, value)) = line.split_once('=') {
                params.insert(key.trim(), value.trim());
            } else if line.contains(ROW_SEPARATOR) {
                params.push_row(line.split(ROW_SEPARATOR).map(str::to_string).collect());
            }
        }
        params
    }

    /// Insert a parameter; a repeated key replaces the earlier value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.named.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => self.named.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.named
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.named.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Table rows in source order; the first row is the header row
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.rows.is_empty()
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}={}", key, value)?;
            first = false;
        }
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_values() {
        let params = Params::parse("name = Planets \ncolor=#fff");
        assert_eq!(params.get("name"), Some("Planets"));
        assert_eq!(params.get("color"), Some("#fff"));
        assert!(!params.has_rows());
    }

    #[test]
    fn test_value_keeps_later_equals() {
        let params = Params::parse("l1=(a=b)");
        assert_eq!(params.get("l1"), Some("(a=b)"));
    }

    #[test]
    fn test_rows_split_on_double_backslash() {
        let params = Params::parse("A\\\\B\n1\\\\2");
        assert_eq!(
            params.rows(),
            &[
                vec!["A".to_string(), "B".to_string()],
                vec!["1".to_string(), "2".to_string()]
            ]
        );
    }

    #[test]
    fn test_line_with_equals_is_parameter_not_row() {
        let params = Params::parse("x=1\\\\2");
        assert_eq!(params.get("x"), Some("1\\\\2"));
        assert!(!params.has_rows());
    }

    #[test]
    fn test_other_lines_are_ignored() {
        let params = Params::parse("just text\n\nmore");
        assert!(params.is_empty());
    }

    #[test]
    fn test_repeated_key_replaces_value() {
        let params = Params::parse("a=1\nb=2\na=3");
        assert_eq!(params.get("a"), Some("3"));
        assert_eq!(params.to_string(), "a=3 b=2");
    }

    #[test]
    fn test_fallback_text_strips_brackets() {
        let directive = Directive::new("bogus", Params::new(), "[bogus x=1\n]");
        assert_eq!(directive.fallback_text(), "bogus x=1");

        let one_line = Directive::new("bogus", Params::new(), "[bogus x=1]");
        assert_eq!(one_line.fallback_text(), "bogus x=1");
    }
}
