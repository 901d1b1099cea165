//! Pager widget
//!
//! Renders windowed page links and a "Displaying x to y of z results."
//! header after every response, and turns page clicks into a new `start`.

use super::{PageEvent, Reaction, Widget, WidgetContext};
use crate::types::SearchResponse;

/// Renders the header line from `(per_page, offset, total)`
pub type HeaderRenderer = Box<dyn Fn(u64, u64, u64) -> String + Send>;

const GAP: &str = "…";

/// Page counts above this are clamped before the window arithmetic
const MAX_PAGES: u64 = i64::MAX as u64 / 4;

/// Paging position derived from the last response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PagerState {
    pub per_page: u64,
    pub offset: u64,
    pub total: u64,
}

impl PagerState {
    /// 1-based page containing `offset`
    pub fn current_page(&self) -> u64 {
        (self.offset / self.per_page.max(1)).saturating_add(1)
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.per_page.max(1))
    }

    pub fn previous_page(&self) -> Option<u64> {
        let current = self.current_page();
        (current > 1).then(|| current - 1)
    }

    pub fn next_page(&self) -> Option<u64> {
        let current = self.current_page();
        (current < self.total_pages()).then(|| current + 1)
    }

    /// Offset of the first record on `page`
    pub fn page_offset(&self, page: u64) -> u64 {
        page.saturating_sub(1).saturating_mul(self.per_page)
    }
}

/// `Displaying <first> to <last> of <total> results.`
pub fn header_text(per_page: u64, offset: u64, total: u64) -> String {
    format!(
        "Displaying {} to {} of {} results.",
        total.min(offset.saturating_add(1)),
        total.min(offset.saturating_add(per_page)),
        total
    )
}

/// Page numbers to link, ascending
///
/// Always includes the first and last page, `inner` pages either side of
/// the current one, and `outer` pages next to each end. A window cut short
/// at one end is lengthened at the other. A gap of exactly one page is
/// filled in rather than elided. A `current` past the last page is treated
/// as the last page.
pub fn visible_page_numbers(current: u64, total_pages: u64, inner: u64, outer: u64) -> Vec<u64> {
    if total_pages == 0 {
        return Vec::new();
    }

    let total_pages = total_pages.min(MAX_PAGES);
    let (current, total, inner, outer) = (
        current.clamp(1, total_pages) as i64,
        total_pages as i64,
        inner.min(MAX_PAGES) as i64,
        outer.min(MAX_PAGES) as i64,
    );

    let mut from = current - inner;
    let mut to = current + inner;
    if to > total {
        from = (from - (to - total)).max(0);
        to = total;
    }
    if from < 1 {
        to = total.min(to + (1 - from));
        from = 1;
    }

    let mut visible = vec![1];
    visible.extend(2..=(1 + outer).min(from - 1));
    if 1 + outer == from - 2 {
        visible.push(from - 1);
    }
    visible.extend(2.max(from)..=to.min(total - 1));
    if total - outer == to + 2 {
        visible.push(to + 1);
    }
    visible.extend((total - outer).max(to + 1)..total);
    if total > 1 {
        visible.push(total);
    }

    visible.into_iter().map(|page| page as u64).collect()
}

pub struct PagerWidget {
    id: String,
    target: String,
    header_target: Option<String>,
    header_renderer: HeaderRenderer,
    prev_label: String,
    next_label: String,
    inner_window: u64,
    outer_window: u64,
    default_per_page: u64,
    state: PagerState,
}

impl PagerWidget {
    pub fn new(id: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target: target.into(),
            header_target: None,
            header_renderer: Box::new(header_text),
            prev_label: "‹".to_string(),
            next_label: "›".to_string(),
            inner_window: 4,
            outer_window: 1,
            default_per_page: 10,
            state: PagerState::default(),
        }
    }

    pub fn with_labels(mut self, prev: impl Into<String>, next: impl Into<String>) -> Self {
        self.prev_label = prev.into();
        self.next_label = next.into();
        self
    }

    pub fn with_windows(mut self, inner: u64, outer: u64) -> Self {
        self.inner_window = inner;
        self.outer_window = outer;
        self
    }

    pub fn with_per_page(mut self, per_page: u64) -> Self {
        self.default_per_page = per_page.max(1);
        self
    }

    /// Render the header into `target` after every response
    pub fn with_header(mut self, target: impl Into<String>) -> Self {
        self.header_target = Some(target.into());
        self
    }

    pub fn with_header_renderer<F>(mut self, renderer: F) -> Self
    where
        F: Fn(u64, u64, u64) -> String + Send + 'static,
    {
        self.header_renderer = Box::new(renderer);
        self
    }

    pub fn state(&self) -> PagerState {
        self.state
    }

    /// Link line such as `‹ 1 2 [3] 4 … 10 ›`
    pub fn render_links(&self) -> String {
        let current = self.state.current_page();
        let pages = visible_page_numbers(
            current,
            self.state.total_pages(),
            self.inner_window,
            self.outer_window,
        );

        let mut parts = Vec::with_capacity(pages.len() + 2);
        if self.state.previous_page().is_some() {
            parts.push(self.prev_label.clone());
        }

        let mut prev: Option<u64> = None;
        for page in pages {
            if prev.is_some_and(|p| page > p + 1) {
                parts.push(GAP.to_string());
            }
            if page == current {
                parts.push(format!("[{}]", page));
            } else {
                parts.push(page.to_string());
            }
            prev = Some(page);
        }

        if self.state.next_page().is_some() {
            parts.push(self.next_label.clone());
        }
        parts.join(" ")
    }

    fn per_page(&self, response: &SearchResponse, ctx: &WidgetContext<'_>) -> u64 {
        response
            .header
            .param_u64("rows")
            .or_else(|| ctx.store.get("rows").and_then(|v| v.parse().ok()))
            .filter(|&rows| rows > 0)
            .unwrap_or(self.default_per_page)
    }

    fn offset(&self, response: &SearchResponse, ctx: &WidgetContext<'_>) -> u64 {
        response
            .header
            .param_u64("start")
            .or_else(|| ctx.store.get("start").and_then(|v| v.parse().ok()))
            .unwrap_or(0)
    }
}

impl Widget for PagerWidget {
    fn id(&self) -> &str {
        &self.id
    }

    fn target(&self) -> &str {
        &self.target
    }

    fn after_request(&mut self, response: &SearchResponse, ctx: &mut WidgetContext<'_>) {
        self.state = PagerState {
            per_page: self.per_page(response, ctx),
            offset: self.offset(response, ctx),
            total: response.response.num_found,
        };

        ctx.page.set_content(&self.target, self.render_links());
        if let Some(header_target) = &self.header_target {
            let PagerState {
                per_page,
                offset,
                total,
            } = self.state;
            ctx.page
                .set_content(header_target, (self.header_renderer)(per_page, offset, total));
        }
    }

    fn handle_event(&mut self, event: &PageEvent, ctx: &mut WidgetContext<'_>) -> Reaction {
        let PageEvent::PageClick(page) = *event else {
            return Reaction::Ignore;
        };

        if page == 0 || page > self.state.total_pages() || page == self.state.current_page() {
            tracing::debug!(widget = %self.id, page, "Ignoring click on inactive page");
            return Reaction::Ignore;
        }

        let start = self.state.page_offset(page);
        tracing::debug!(widget = %self.id, page, start, "Page selected");
        ctx.store.add_by_value("start", start.to_string());
        Reaction::Request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{selectors, Page};
    use crate::store::ParameterStore;
    use serde_json::json;

    fn response(rows: &str, start: &str, total: u64) -> SearchResponse {
        serde_json::from_value(json!({
            "responseHeader": { "params": { "rows": rows, "start": start } },
            "response": { "numFound": total, "docs": [] }
        }))
        .unwrap()
    }

    fn pager() -> PagerWidget {
        PagerWidget::new("pager", selectors::PAGER)
            .with_labels("<", ">")
            .with_windows(1, 1)
            .with_header(selectors::PAGER_HEADER)
    }

    #[test]
    fn test_header_text() {
        assert_eq!(header_text(10, 0, 37), "Displaying 1 to 10 of 37 results.");
        assert_eq!(header_text(10, 30, 37), "Displaying 31 to 37 of 37 results.");
        assert_eq!(header_text(10, 0, 0), "Displaying 0 to 0 of 0 results.");
        assert_eq!(header_text(25, 0, 5), "Displaying 1 to 5 of 5 results.");
        assert_eq!(
            header_text(10, u64::MAX, 37),
            "Displaying 37 to 37 of 37 results."
        );
        assert_eq!(
            header_text(u64::MAX, 5, 100),
            "Displaying 6 to 100 of 100 results."
        );
    }

    #[test]
    fn test_pager_state() {
        let state = PagerState {
            per_page: 10,
            offset: 30,
            total: 37,
        };
        assert_eq!(state.current_page(), 4);
        assert_eq!(state.total_pages(), 4);
        assert_eq!(state.previous_page(), Some(3));
        assert_eq!(state.next_page(), None);
        assert_eq!(state.page_offset(2), 10);

        let first = PagerState {
            per_page: 10,
            offset: 0,
            total: 37,
        };
        assert_eq!(first.previous_page(), None);
        assert_eq!(first.next_page(), Some(2));

        let empty = PagerState::default();
        assert_eq!(empty.total_pages(), 0);
        assert_eq!(empty.current_page(), 1);

        let far = PagerState {
            per_page: 1,
            offset: u64::MAX,
            total: 37,
        };
        assert_eq!(far.current_page(), u64::MAX);
        assert_eq!(far.next_page(), None);
        assert_eq!(first.page_offset(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_visible_page_numbers() {
        assert_eq!(visible_page_numbers(1, 0, 1, 1), Vec::<u64>::new());
        assert_eq!(visible_page_numbers(1, 1, 1, 1), vec![1]);
        assert_eq!(visible_page_numbers(1, 4, 1, 1), vec![1, 2, 3, 4]);
        assert_eq!(visible_page_numbers(5, 10, 1, 1), vec![1, 2, 3, 4, 5, 6, 9, 10]);
        assert_eq!(visible_page_numbers(1, 10, 1, 1), vec![1, 2, 3, 9, 10]);
        assert_eq!(visible_page_numbers(10, 10, 1, 1), vec![1, 2, 8, 9, 10]);
        assert_eq!(visible_page_numbers(99, 4, 1, 1), vec![1, 2, 3, 4]);
        assert_eq!(visible_page_numbers(u64::MAX, u64::MAX, 1, 1).len(), 5);
    }

    #[test]
    fn test_render_links() {
        let mut store = ParameterStore::new();
        let mut page = Page::with_regions([selectors::PAGER, selectors::PAGER_HEADER]);
        let mut ctx = WidgetContext {
            store: &mut store,
            page: &mut page,
        };

        let mut pager = pager();
        pager.after_request(&response("10", "40", 100), &mut ctx);

        assert_eq!(
            ctx.page.content(selectors::PAGER),
            Some("< 1 2 3 4 [5] 6 … 9 10 >")
        );
        assert_eq!(
            ctx.page.content(selectors::PAGER_HEADER),
            Some("Displaying 41 to 50 of 100 results.")
        );
    }

    #[test]
    fn test_falls_back_to_store_and_defaults() {
        let mut store = ParameterStore::new();
        store.add_by_value("start", "30");
        let mut page = Page::with_regions([selectors::PAGER, selectors::PAGER_HEADER]);
        let mut ctx = WidgetContext {
            store: &mut store,
            page: &mut page,
        };

        let mut pager = pager();
        let response: SearchResponse =
            serde_json::from_value(json!({ "response": { "numFound": 37 } })).unwrap();
        pager.after_request(&response, &mut ctx);

        assert_eq!(
            pager.state(),
            PagerState {
                per_page: 10,
                offset: 30,
                total: 37
            }
        );
        assert_eq!(
            ctx.page.content(selectors::PAGER_HEADER),
            Some("Displaying 31 to 37 of 37 results.")
        );
        assert_eq!(ctx.page.content(selectors::PAGER), Some("< 1 2 3 [4]"));
    }

    #[test]
    fn test_echoed_start_past_the_end() {
        let mut store = ParameterStore::new();
        let mut page = Page::with_regions([selectors::PAGER, selectors::PAGER_HEADER]);
        let mut ctx = WidgetContext {
            store: &mut store,
            page: &mut page,
        };

        let mut pager = pager();
        pager.after_request(&response("10", "18446744073709551615", 37), &mut ctx);

        assert_eq!(pager.state().offset, u64::MAX);
        assert_eq!(
            ctx.page.content(selectors::PAGER_HEADER),
            Some("Displaying 37 to 37 of 37 results.")
        );
        assert_eq!(ctx.page.content(selectors::PAGER), Some("< 1 2 3 4"));

        // Every real page is clickable again
        assert_eq!(
            pager.handle_event(&PageEvent::PageClick(4), &mut ctx),
            Reaction::Request
        );
        assert_eq!(ctx.store.get("start"), Some("30"));
    }

    #[test]
    fn test_custom_header_renderer() {
        let mut store = ParameterStore::new();
        let mut page = Page::with_regions([selectors::PAGER, selectors::PAGER_HEADER]);
        let mut ctx = WidgetContext {
            store: &mut store,
            page: &mut page,
        };

        let mut pager = pager().with_header_renderer(|_, _, total| format!("{} hits", total));
        pager.after_request(&response("10", "0", 3), &mut ctx);
        assert_eq!(ctx.page.content(selectors::PAGER_HEADER), Some("3 hits"));
    }

    #[test]
    fn test_page_click() {
        let mut store = ParameterStore::new();
        let mut page = Page::with_regions([selectors::PAGER, selectors::PAGER_HEADER]);
        let mut ctx = WidgetContext {
            store: &mut store,
            page: &mut page,
        };

        let mut pager = pager();
        pager.after_request(&response("10", "0", 37), &mut ctx);

        assert_eq!(
            pager.handle_event(&PageEvent::PageClick(3), &mut ctx),
            Reaction::Request
        );
        assert_eq!(ctx.store.get("start"), Some("20"));

        // Current page, out of range, and zero are all inactive
        for page in [1, 5, 0] {
            assert_eq!(
                pager.handle_event(&PageEvent::PageClick(page), &mut ctx),
                Reaction::Ignore
            );
        }
        assert_eq!(ctx.store.get("start"), Some("20"));
    }
}
