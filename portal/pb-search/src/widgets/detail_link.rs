//! Detail link widget
//!
//! Shows every field of one record in the detail panel. Records from the
//! last response are shown straight away; any other id is looked up with a
//! one-off request that leaves the listing query untouched.

use super::{PageEvent, Reaction, Widget, WidgetContext};
use crate::types::{field_text, Document, SearchResponse};

pub struct DetailLinkWidget {
    id: String,
    target: String,
    panel: String,
    id_field: String,
    class_filter: String,
    docs: Vec<Document>,
    pending: Option<String>,
}

impl DetailLinkWidget {
    pub fn new(id: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target: target.into(),
            panel: String::new(),
            id_field: "id".to_string(),
            class_filter: String::new(),
            docs: Vec::new(),
            pending: None,
        }
    }

    /// Region shown while a record is displayed and hidden otherwise
    pub fn with_panel(mut self, panel: impl Into<String>) -> Self {
        self.panel = panel.into();
        self
    }

    pub fn with_id_field(mut self, id_field: impl Into<String>) -> Self {
        self.id_field = id_field.into();
        self
    }

    /// Filter lookups are restricted to, as the listing is
    pub fn with_class_filter(mut self, class_filter: impl Into<String>) -> Self {
        self.class_filter = class_filter.into();
        self
    }

    /// Record id awaiting a lookup response
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    fn find<'d>(&self, docs: &'d [Document], record_id: &str) -> Option<&'d Document> {
        docs.iter()
            .find(|doc| field_text(doc, &self.id_field).as_deref() == Some(record_id))
    }

    fn lookup_query(&self, record_id: &str) -> String {
        let term = format!("{}:{}", self.id_field, quote_term(record_id));
        if self.class_filter.is_empty() {
            term
        } else {
            format!("{} AND {}", self.class_filter, term)
        }
    }

    fn show(&self, content: String, ctx: &mut WidgetContext<'_>) {
        ctx.page.set_content(&self.target, content);
        ctx.page.show(&self.panel);
    }

    fn close(&self, ctx: &mut WidgetContext<'_>) {
        ctx.page.clear(&self.target);
        ctx.page.hide(&self.panel);
    }
}

/// One `field: value` line per displayable field, sorted by field name
pub fn render_detail(doc: &Document) -> String {
    let mut fields: Vec<&String> = doc.keys().collect();
    fields.sort();

    fields
        .into_iter()
        .filter_map(|field| field_text(doc, field).map(|value| format!("{}: {}", field, value)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Quote a record id for use as a Solr term
fn quote_term(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

impl Widget for DetailLinkWidget {
    fn id(&self) -> &str {
        &self.id
    }

    fn target(&self) -> &str {
        &self.target
    }

    fn after_request(&mut self, response: &SearchResponse, _ctx: &mut WidgetContext<'_>) {
        self.docs = response.response.docs.clone();
    }

    fn after_lookup(&mut self, response: &SearchResponse, ctx: &mut WidgetContext<'_>) {
        let Some(record_id) = self.pending.take() else {
            return;
        };

        let content = match self.find(&response.response.docs, &record_id) {
            Some(doc) => render_detail(doc),
            None => format!("No record found for {}.", record_id),
        };
        self.show(content, ctx);
    }

    fn handle_event(&mut self, event: &PageEvent, ctx: &mut WidgetContext<'_>) -> Reaction {
        match event {
            PageEvent::DetailClick(record_id) => {
                if let Some(doc) = self.find(&self.docs, record_id) {
                    tracing::debug!(widget = %self.id, record = %record_id, "Showing cached record");
                    let content = render_detail(doc);
                    self.show(content, ctx);
                    return Reaction::Handled;
                }

                tracing::debug!(widget = %self.id, record = %record_id, "Looking up record");
                let mut lookup = ctx.store.clone();
                lookup.add_by_value("q", self.lookup_query(record_id));
                lookup.remove("start");
                lookup.add_by_value("rows", "1");
                self.pending = Some(record_id.clone());
                Reaction::Lookup(lookup.pairs())
            }
            // Any other navigation closes the panel
            PageEvent::Submit(_) | PageEvent::PageClick(_) => {
                self.pending = None;
                self.close(ctx);
                Reaction::Ignore
            }
        }
    }
}
