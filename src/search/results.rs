//! Search result items and the results panel.

use super::glossary::GlossaryCard;
use super::index::SearchHit;
use crate::ui::page::capitalize_first;
use std::fmt::Write as _;

/// Title shown for a result: the site section the page lives under, then the
/// page title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTitle {
    pub section: Option<String>,
    pub title: String,
}

impl ResultTitle {
    /// The section is the fourth `/`-separated segment of the page URL,
    /// e.g. `docs` in `https://example.org/docs/guide/`.
    pub fn from_hit(hit: &SearchHit) -> Self {
        let section = hit
            .reference
            .split('/')
            .nth(3)
            .filter(|segment| !segment.is_empty())
            .map(capitalize_first);

        Self {
            section,
            title: hit.doc.title.clone(),
        }
    }

    pub fn to_html(&self) -> String {
        match &self.section {
            Some(section) => format!(
                r#"{}<span class="gray1 dib pl2"> / {}</span>"#,
                escape_html(section),
                escape_html(&self.title)
            ),
            None => escape_html(&self.title),
        }
    }
}

impl std::fmt::Display for ResultTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.section {
            Some(section) => write!(f, "{} / {}", section, self.title),
            None => f.write_str(&self.title),
        }
    }
}

/// One rendered search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub href: String,
    pub title: ResultTitle,
    pub teaser: String,
}

impl ResultItem {
    pub fn to_html(&self) -> String {
        format!(
            r#"<li class="search-results__item"><a href="{}" class="no-underline db pl1 pv2"><span class="capitalize ph3">{}</span><span class="dn arrow fr">&rarr;</span><div class="truncate pr2 ph3">{}</div></a></li>"#,
            escape_html(&self.href),
            self.title.to_html(),
            escape_html(&self.teaser)
        )
    }
}

/// Everything the search window displays for one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsPanel {
    /// Trimmed query the panel was built for
    pub query: String,
    /// Whether the results box is shown at all
    pub visible: bool,
    /// Whether the clear-input button is shown
    pub reset_visible: bool,
    pub glossary: Option<GlossaryCard>,
    pub header: Option<String>,
    /// Hits with a body, including any beyond the rendered items
    pub total: usize,
    pub items: Vec<ResultItem>,
}

impl ResultsPanel {
    /// Panel state for an empty query.
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn header_for(query: &str, total: usize) -> String {
        if total == 0 {
            format!("No search results for '{}'.", query)
        } else {
            format!("{} search results for '{}':", total, query)
        }
    }

    /// Link followed when Enter is pressed in the search window.
    pub fn first_href(&self) -> Option<&str> {
        self.items.first().map(|item| item.href.as_str())
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        if let Some(card) = &self.glossary {
            let _ = write!(html, r#"<div class="glossary-results">{}</div>"#, card.to_html());
        }
        if !self.visible {
            return html;
        }
        if let Some(header) = &self.header {
            let _ = write!(
                html,
                r#"<div class="search-results__header">{}</div>"#,
                escape_html(header)
            );
        }
        html.push_str(r#"<ul class="search-results__items">"#);
        for item in &self.items {
            html.push_str(&item.to_html());
        }
        html.push_str("</ul>");
        html
    }

    pub fn to_text(&self) -> String {
        let mut text = String::new();
        if let Some(card) = &self.glossary {
            let _ = writeln!(text, "{}\n", card.to_text());
        }
        if !self.visible {
            return text;
        }
        if let Some(header) = &self.header {
            let _ = writeln!(text, "{}", header);
        }
        for item in &self.items {
            let _ = writeln!(text, "\n{}\n  {}\n  {}", item.title, item.href, item.teaser);
        }
        text
    }
}

/// Escape text for insertion into HTML content or attribute values.
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
