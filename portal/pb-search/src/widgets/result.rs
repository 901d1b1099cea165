//! Result list widget

use super::{Widget, WidgetContext};
use crate::types::{field_text, Document, SearchResponse};

const LOADING: &str = "Loading...";
const NO_RESULTS: &str = "No results found.";

/// Renders one line per returned document
pub struct ResultWidget {
    id: String,
    target: String,
    title_field: String,
    summary_fields: Vec<String>,
}

impl ResultWidget {
    pub fn new(id: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target: target.into(),
            title_field: "id".to_string(),
            summary_fields: Vec::new(),
        }
    }

    /// Choose the title field and the fields listed after it
    pub fn with_fields(mut self, title_field: impl Into<String>, summary_fields: Vec<String>) -> Self {
        self.title_field = title_field.into();
        self.summary_fields = summary_fields;
        self
    }

    /// `title - field | field | ...`, skipping fields the document lacks
    pub fn render_document(&self, doc: &Document) -> String {
        let title = field_text(doc, &self.title_field).unwrap_or_else(|| "(untitled)".to_string());
        let summary: Vec<String> = self
            .summary_fields
            .iter()
            .filter_map(|field| field_text(doc, field))
            .collect();

        if summary.is_empty() {
            title
        } else {
            format!("{} - {}", title, summary.join(" | "))
        }
    }
}

impl Widget for ResultWidget {
    fn id(&self) -> &str {
        &self.id
    }

    fn target(&self) -> &str {
        &self.target
    }

    fn before_request(&mut self, ctx: &mut WidgetContext<'_>) {
        ctx.page.set_content(&self.target, LOADING);
    }

    fn after_request(&mut self, response: &SearchResponse, ctx: &mut WidgetContext<'_>) {
        let docs = &response.response.docs;
        let content = if docs.is_empty() {
            NO_RESULTS.to_string()
        } else {
            docs.iter()
                .map(|doc| self.render_document(doc))
                .collect::<Vec<_>>()
                .join("\n")
        };
        ctx.page.set_content(&self.target, content);
    }
}
