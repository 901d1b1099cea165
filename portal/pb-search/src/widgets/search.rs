//! Free-text search box widget

use super::{PageEvent, Reaction, Widget, WidgetContext};

/// Turns submitted text into the `q` parameter
///
/// Every query stays restricted to the profile's class filter.
pub struct SearchWidget {
    id: String,
    target: String,
    class_filter: String,
    text: String,
}

impl SearchWidget {
    pub fn new(id: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target: target.into(),
            class_filter: String::new(),
            text: String::new(),
        }
    }

    pub fn with_class_filter(mut self, class_filter: impl Into<String>) -> Self {
        self.class_filter = class_filter.into();
        self
    }

    /// Text of the last submission, trimmed
    pub fn text(&self) -> &str {
        &self.text
    }

    fn render(&self, ctx: &mut WidgetContext<'_>) {
        ctx.page.set_content(&self.target, format!("Search: {}", self.text));
    }
}

/// Combine the class filter and user text into one query
///
/// Empty text searches the whole class; with no class filter the text is
/// used alone, and with neither everything matches.
pub fn compose_query(class_filter: &str, text: &str) -> String {
    let filter = class_filter.trim();
    let text = text.trim();

    match (filter.is_empty(), text.is_empty()) {
        (true, true) => "*:*".to_string(),
        (true, false) => text.to_string(),
        (false, true) => filter.to_string(),
        (false, false) => format!("{} AND ({})", filter, text),
    }
}

impl Widget for SearchWidget {
    fn id(&self) -> &str {
        &self.id
    }

    fn target(&self) -> &str {
        &self.target
    }

    fn init(&mut self, ctx: &mut WidgetContext<'_>) {
        self.render(ctx);
    }

    fn handle_event(&mut self, event: &PageEvent, ctx: &mut WidgetContext<'_>) -> Reaction {
        let PageEvent::Submit(text) = event else {
            return Reaction::Ignore;
        };

        self.text = text.trim().to_string();
        let query = compose_query(&self.class_filter, &self.text);
        tracing::debug!(widget = %self.id, %query, "Search submitted");

        ctx.store.add_by_value("q", query);
        // A new query always starts from the first page
        ctx.store.remove("start");
        self.render(ctx);

        Reaction::Request
    }
}
