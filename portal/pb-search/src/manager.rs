//! Search manager
//!
//! The manager owns the parameter store, the page, and the registered
//! widgets, and is the only thing that talks to the transport. Requests run
//! one at a time through `&mut self`: widgets see `before_request`, the
//! transport executes, then widgets see `after_request` with the response.
//! Lookups asked for by a single widget bypass the store and are answered to
//! that widget alone.

use std::sync::Arc;

use crate::backends::SearchTransport;
use crate::config::DEFAULT_SERVLET;
use crate::error::{SearchError, SearchResult};
use crate::page::Page;
use crate::store::ParameterStore;
use crate::types::SearchResponse;
use crate::widgets::{PageEvent, Reaction, Widget, WidgetContext};

pub struct Manager {
    transport: Arc<dyn SearchTransport>,
    servlet: String,
    store: ParameterStore,
    page: Page,
    widgets: Vec<Box<dyn Widget>>,
    initialized: bool,
    response: Option<SearchResponse>,
    requests: u64,
}

impl Manager {
    pub fn new(transport: Arc<dyn SearchTransport>, page: Page) -> Self {
        Self {
            transport,
            servlet: DEFAULT_SERVLET.to_string(),
            store: ParameterStore::new(),
            page,
            widgets: Vec::new(),
            initialized: false,
            response: None,
            requests: 0,
        }
    }

    /// Servlet used by requests that do not name one
    pub fn with_servlet(mut self, servlet: impl Into<String>) -> Self {
        self.servlet = servlet.into();
        self
    }

    /// Register a widget
    ///
    /// Widgets added after `init` are initialized immediately.
    pub fn add_widget(&mut self, mut widget: Box<dyn Widget>) -> SearchResult<()> {
        if self.widgets.iter().any(|w| w.id() == widget.id()) {
            return Err(SearchError::DuplicateWidget(widget.id().to_string()));
        }

        tracing::debug!(widget = widget.id(), target = widget.target(), "Adding widget");

        if self.initialized {
            let mut ctx = WidgetContext {
                store: &mut self.store,
                page: &mut self.page,
            };
            widget.init(&mut ctx);
        }
        self.widgets.push(widget);
        Ok(())
    }

    /// Initialize every registered widget; later calls do nothing
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }

        for widget in self.widgets.iter_mut() {
            let mut ctx = WidgetContext {
                store: &mut self.store,
                page: &mut self.page,
            };
            widget.init(&mut ctx);
        }

        self.initialized = true;
        tracing::info!(
            widgets = self.widgets.len(),
            transport = self.transport.name(),
            "Manager initialized"
        );
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn servlet(&self) -> &str {
        &self.servlet
    }

    pub fn store(&self) -> &ParameterStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ParameterStore {
        &mut self.store
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn widget_ids(&self) -> impl Iterator<Item = &str> {
        self.widgets.iter().map(|w| w.id())
    }

    /// Last successful listing response
    pub fn response(&self) -> Option<&SearchResponse> {
        self.response.as_ref()
    }

    /// Requests issued so far, including failed ones
    pub fn request_count(&self) -> u64 {
        self.requests
    }

    /// Issue a request with the current store
    ///
    /// `start`, when given, is written to the store first. `servlet`
    /// overrides the manager's servlet for this request only.
    pub async fn do_request(
        &mut self,
        start: Option<u64>,
        servlet: Option<&str>,
    ) -> SearchResult<&SearchResponse> {
        if !self.initialized {
            return Err(SearchError::NotInitialized);
        }

        if let Some(start) = start {
            self.store.add_by_value("start", start.to_string());
        }
        let servlet = servlet.unwrap_or(self.servlet.as_str()).to_string();

        for widget in self.widgets.iter_mut() {
            let mut ctx = WidgetContext {
                store: &mut self.store,
                page: &mut self.page,
            };
            widget.before_request(&mut ctx);
        }

        let params = self.store.pairs();
        tracing::info!(
            servlet = %servlet,
            params = params.len(),
            query = %self.store.query_string(),
            "Issuing search request"
        );

        self.requests += 1;
        let response = self.transport.execute(&servlet, &params).await?;
        tracing::debug!(
            num_found = response.response.num_found,
            returned = response.response.docs.len(),
            qtime = response.header.qtime,
            "Search response received"
        );

        for widget in self.widgets.iter_mut() {
            let mut ctx = WidgetContext {
                store: &mut self.store,
                page: &mut self.page,
            };
            widget.after_request(&response, &mut ctx);
        }

        Ok(&*self.response.insert(response))
    }

    /// Deliver a page event to every widget
    ///
    /// If any widget asks for it, one request is issued afterwards, followed
    /// by the lookups widgets asked for. Returns whether anything was
    /// requested.
    pub async fn dispatch(&mut self, event: PageEvent) -> SearchResult<bool> {
        if !self.initialized {
            return Err(SearchError::NotInitialized);
        }

        tracing::debug!(?event, "Dispatching page event");

        let mut wants_request = false;
        let mut lookups = Vec::new();
        for (index, widget) in self.widgets.iter_mut().enumerate() {
            let mut ctx = WidgetContext {
                store: &mut self.store,
                page: &mut self.page,
            };
            match widget.handle_event(&event, &mut ctx) {
                Reaction::Request => wants_request = true,
                Reaction::Lookup(params) => lookups.push((index, params)),
                Reaction::Handled => {
                    tracing::debug!(widget = widget.id(), "Event handled locally")
                }
                Reaction::Ignore => {}
            }
        }

        if wants_request {
            self.do_request(None, None).await?;
        }

        let looked_up = !lookups.is_empty();
        for (index, params) in lookups {
            self.lookup(index, params).await?;
        }

        Ok(wants_request || looked_up)
    }

    async fn lookup(&mut self, index: usize, params: Vec<(String, String)>) -> SearchResult<()> {
        tracing::info!(
            servlet = %self.servlet,
            params = params.len(),
            widget = self.widgets[index].id(),
            "Issuing lookup request"
        );

        self.requests += 1;
        let response = self.transport.execute(&self.servlet, &params).await?;
        tracing::debug!(
            num_found = response.response.num_found,
            qtime = response.header.qtime,
            "Lookup response received"
        );

        let mut ctx = WidgetContext {
            store: &mut self.store,
            page: &mut self.page,
        };
        self.widgets[index].after_lookup(&response, &mut ctx);
        Ok(())
    }
}
