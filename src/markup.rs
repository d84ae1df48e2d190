use std::fmt;

/// A rendered HTML fragment.
///
/// Treated as opaque text. For control markup the first `>` must close the
/// opening tag: that position is where decorators insert attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
    pub fn new(html: impl Into<String>) -> Self {
        Markup(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Byte offset of the first `>`, if any
    pub fn insertion_point(&self) -> Option<usize> {
        self.0.find('>')
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Markup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Markup {
    fn from(html: String) -> Self {
        Markup(html)
    }
}

impl From<&str> for Markup {
    fn from(html: &str) -> Self {
        Markup(html.to_string())
    }
}

impl From<Markup> for String {
    fn from(markup: Markup) -> Self {
        markup.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_point_is_first_closing_bracket() {
        let markup = Markup::from("<select size=\"1\">\n\t<option value=\"a\">A</option>");
        assert_eq!(markup.insertion_point(), Some(16));
    }

    #[test]
    fn test_insertion_point_missing() {
        assert_eq!(Markup::from("plain text").insertion_point(), None);
        assert_eq!(Markup::default().insertion_point(), None);
    }
}
