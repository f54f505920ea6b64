//! File references
//!
//! The `file` directive only needs to turn a file name into a displayable link. Whether
//! the file exists is the host's concern; resolution here is purely textual.

/// Turns a file name into the HTML shown for a `[file name=...]` directive
pub trait FileResolver: Send + Sync {
    fn file_link(&self, name: &str) -> String;
}

/// Links files under a fixed URL prefix, e.g. `/wiki/files/<name>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixFileResolver {
    prefix: String,
}

impl PrefixFileResolver {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for PrefixFileResolver {
    fn default() -> Self {
        Self::new("/wiki/files/")
    }
}

impl FileResolver for PrefixFileResolver {
    fn file_link(&self, name: &str) -> String {
        format!(
            "<a href=\"{}{}\" class=\"file-link\">{}</a>",
            self.prefix, name, name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefix() {
        let resolver = PrefixFileResolver::default();
        assert_eq!(
            resolver.file_link("report.pdf"),
            "<a href=\"/wiki/files/report.pdf\" class=\"file-link\">report.pdf</a>"
        );
    }

    #[test]
    fn test_custom_prefix() {
        let resolver = PrefixFileResolver::new("/static/");
        assert_eq!(resolver.prefix(), "/static/");
        assert!(resolver.file_link("a.png").starts_with("<a href=\"/static/a.png\""));
    }
}
