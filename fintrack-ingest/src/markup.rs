//! HTML bodies: visible text and the fixed-layout table walk.

use std::borrow::Cow;

use fintrack_core::InboundEmail;
use scraper::{ElementRef, Html};

/// The text body of `email`. When the plain-text part is empty, the visible
/// text of the HTML part is used instead.
pub fn body_text(email: &InboundEmail) -> Cow<'_, str> {
    if !email.body.trim().is_empty() {
        return Cow::Borrowed(&email.body);
    }
    match &email.html_body {
        Some(html) => Cow::Owned(visible_text(html)),
        None => Cow::Borrowed(""),
    }
}

/// Concatenated text nodes of an HTML document, with literal `&nbsp`
/// leftovers turned into line breaks.
pub fn visible_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    let text: String = doc.root_element().text().collect();
    text.replace("&nbsp", "\n")
}

fn cell_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Walks the `td` cells that follow a header cell, in document order.
///
/// This assumes the notification table never changes its column layout.
/// Callers read cells positionally; a missing cell reads as empty.
#[derive(Debug)]
pub struct TableCursor {
    cells: std::vec::IntoIter<String>,
}

impl TableCursor {
    /// Position the cursor after the first `th` whose text is one of
    /// `headers`. Returns `None` when no such header exists.
    pub fn after_header(html: &str, headers: &[&str]) -> Option<Self> {
        let doc = Html::parse_document(html);
        let mut elements = doc
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap);

        elements
            .by_ref()
            .find(|el| el.value().name() == "th" && headers.contains(&cell_text(el).as_str()))?;

        let cells: Vec<String> = elements
            .filter(|el| el.value().name() == "td")
            .map(|el| cell_text(&el))
            .collect();

        Some(Self {
            cells: cells.into_iter(),
        })
    }

    pub fn next_cell(&mut self) -> String {
        self.cells.next().unwrap_or_default()
    }

    pub fn skip(&mut self, count: usize) {
        for _ in 0..count {
            self.cells.next();
        }
    }
}
