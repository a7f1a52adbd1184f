//! Minimal markup builder used by view variants

use std::fmt;

/// Escapes text for use inside element content or a quoted attribute
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Rendered output of a view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Opens the outer `<section>` every view renders into, with its heading
    pub fn section(view_id: u32, class: &str, title: &str) -> Self {
        let mut markup = Self::new();
        markup.0.push_str(&format!(
            "<section class=\"view {}\" data-view-id=\"{}\">",
            escape(class),
            view_id
        ));
        markup.element("h2", "view-title", title);
        markup
    }

    /// Closes the section opened by [`Markup::section`]
    pub fn end_section(mut self) -> Self {
        self.0.push_str("</section>");
        self
    }

    pub fn open(&mut self, tag: &str, class: &str) -> &mut Self {
        self.open_with(tag, class, &[])
    }

    pub fn open_with(&mut self, tag: &str, class: &str, attrs: &[(&str, String)]) -> &mut Self {
        self.0.push('<');
        self.0.push_str(tag);
        if !class.is_empty() {
            self.0.push_str(&format!(" class=\"{}\"", escape(class)));
        }
        for (name, value) in attrs {
            self.0.push_str(&format!(" {}=\"{}\"", name, escape(value)));
        }
        self.0.push('>');
        self
    }

    pub fn close(&mut self, tag: &str) -> &mut Self {
        self.0.push_str(&format!("</{}>", tag));
        self
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.0.push_str(&escape(text));
        self
    }

    /// Element with escaped text content
    pub fn element(&mut self, tag: &str, class: &str, text: &str) -> &mut Self {
        self.open(tag, class).text(text).close(tag)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
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
