//! Phone book search page
//!
//! Page setup and widget composition. [`bootstrap`] does what loading the
//! page does: prepare the regions, build the manager with its four widgets,
//! seed the profile's default parameters, and issue exactly one request.

use std::sync::Arc;

use crate::backends::SearchTransport;
use crate::config::Config;
use crate::error::SearchResult;
use crate::manager::Manager;
use crate::page::{selectors, Page};
use crate::widgets::{DetailLinkWidget, PagerWidget, ResultWidget, SearchWidget};

/// Widget ids
pub mod widget_ids {
    pub const RESULT: &str = "result";
    pub const TEXT: &str = "text";
    pub const DETAIL_LINK: &str = "detailLink";
    pub const PAGER: &str = "pager";
}

/// The phone book page with every region present
pub fn phonebook_page() -> Page {
    Page::with_regions(selectors::ALL.iter().copied())
}

/// Page-ready setup: detail panel hidden, search input focused
pub fn ready(page: &mut Page) {
    page.hide(selectors::DETAIL_PANEL);
    page.focus(selectors::SEARCH_INPUT);
}

/// Build an uninitialized manager with the phone book widgets attached
pub fn build_manager(
    config: &Config,
    transport: Arc<dyn SearchTransport>,
    page: Page,
) -> SearchResult<Manager> {
    let profile = &config.profile;
    let pager = &config.pager;

    let mut manager = Manager::new(transport, page).with_servlet(config.service.servlet.clone());

    manager.add_widget(Box::new(
        ResultWidget::new(widget_ids::RESULT, selectors::DOCS)
            .with_fields(profile.title_field.clone(), profile.summary_fields.clone()),
    ))?;

    manager.add_widget(Box::new(
        SearchWidget::new(widget_ids::TEXT, selectors::SEARCH)
            .with_class_filter(profile.class_filter.clone()),
    ))?;

    manager.add_widget(Box::new(
        DetailLinkWidget::new(widget_ids::DETAIL_LINK, selectors::DETAIL_RESULT)
            .with_panel(selectors::DETAIL_PANEL)
            .with_id_field(profile.id_field.clone())
            .with_class_filter(profile.class_filter.clone()),
    ))?;

    manager.add_widget(Box::new(
        PagerWidget::new(widget_ids::PAGER, selectors::PAGER)
            .with_labels(pager.prev_label.clone(), pager.next_label.clone())
            .with_windows(pager.inner_window, pager.outer_window)
            .with_per_page(pager.per_page)
            .with_header(selectors::PAGER_HEADER),
    ))?;

    Ok(manager)
}

/// Load the page: setup, widgets, default parameters, initial request
///
/// Widgets are initialized before the defaults are seeded.
pub async fn bootstrap(config: &Config, transport: Arc<dyn SearchTransport>) -> SearchResult<Manager> {
    let mut page = phonebook_page();
    ready(&mut page);

    let mut manager = build_manager(config, transport, page)?;
    manager.init();

    for (name, value) in &config.profile.defaults {
        manager.store_mut().add_by_value(name.clone(), value.clone());
    }

    tracing::info!(profile = %config.profile.name, "Issuing initial request");
    manager.do_request(None, None).await?;

    Ok(manager)
}
