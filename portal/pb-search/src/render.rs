//! Plain-text rendering of a page for the terminal

use crate::page::{selectors, Page};

/// Regions printed by [`render_page`], in order
const LAYOUT: &[&str] = &[
    selectors::SEARCH,
    selectors::PAGER_HEADER,
    selectors::DOCS,
    selectors::PAGER,
];

/// Render the visible, non-empty regions as blocks separated by blank lines
///
/// The detail record is only printed while its panel is visible.
pub fn render_page(page: &Page) -> String {
    let mut blocks: Vec<String> = LAYOUT
        .iter()
        .filter(|id| page.is_visible(id))
        .filter_map(|id| page.content(id))
        .filter(|content| !content.is_empty())
        .map(str::to_string)
        .collect();

    if page.is_visible(selectors::DETAIL_PANEL) {
        if let Some(detail) = page.content(selectors::DETAIL_RESULT).filter(|c| !c.is_empty()) {
            blocks.push(format!("Detail\n------\n{}", detail));
        }
    }

    blocks.join("\n\n")
}
