//! Page widgets
//!
//! A widget owns one target region and reacts to the manager's lifecycle
//! (init, before/after each request) and to page events. Widgets never
//! reach the manager directly: the parameter store and the page are handed
//! in through [`WidgetContext`] on every call.

use crate::page::Page;
use crate::store::ParameterStore;
use crate::types::SearchResponse;

pub mod detail_link;
pub mod pager;
pub mod result;
pub mod search;

pub use detail_link::DetailLinkWidget;
pub use pager::{header_text, PagerState, PagerWidget};
pub use result::ResultWidget;
pub use search::SearchWidget;

/// Mutable state a widget may touch during a callback
pub struct WidgetContext<'a> {
    pub store: &'a mut ParameterStore,
    pub page: &'a mut Page,
}

/// User interaction on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// Text submitted in the search box
    Submit(String),
    /// A pager link for the given 1-based page was clicked
    PageClick(u64),
    /// A detail link for the given record id was clicked
    DetailClick(String),
}

/// How a widget responded to an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    /// The event is not for this widget
    Ignore,
    /// Handled locally, no request needed
    Handled,
    /// The store changed and a new request should be issued
    Request,
    /// Run a one-off request with these parameters and hand the response to
    /// this widget only. The store and the other widgets are left alone.
    Lookup(Vec<(String, String)>),
}

/// A pluggable UI unit registered with the manager
pub trait Widget: Send {
    /// Unique id within a manager
    fn id(&self) -> &str;

    /// Region the widget renders into
    fn target(&self) -> &str;

    /// Called once, when the manager initializes (or immediately when the
    /// widget is added to an already initialized manager)
    fn init(&mut self, _ctx: &mut WidgetContext<'_>) {}

    fn before_request(&mut self, _ctx: &mut WidgetContext<'_>) {}

    fn after_request(&mut self, _response: &SearchResponse, _ctx: &mut WidgetContext<'_>) {}

    /// Response to a [`Reaction::Lookup`] this widget asked for
    fn after_lookup(&mut self, _response: &SearchResponse, _ctx: &mut WidgetContext<'_>) {}

    fn handle_event(&mut self, _event: &PageEvent, _ctx: &mut WidgetContext<'_>) -> Reaction {
        Reaction::Ignore
    }
}
