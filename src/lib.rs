//! page-links: pagination link computation and rendering
//!
//! This crate provides:
//! - Pure page-window math (first/prev/numbered/next/last link states)
//! - Strongly-typed display configuration with per-call overrides
//! - Pluggable URL building and anchor rendering
//! - A composed `Paginator` that renders the full control as markup

pub mod config;
pub mod error;
pub mod render;
pub mod request;
pub mod wasm;
pub mod window;

use std::borrow::Cow;

// Re-export WASM types for direct use
pub use wasm::WasmPaginator;

// Re-export primary types
pub use config::{DisplayConfig, DisplayOverrides};
pub use error::{PaginateError, Result};
pub use render::{HtmlLinkRenderer, LinkMarkup, LinkRenderer, RouteUrlBuilder, StringTemplate, UrlBuilder};
pub use request::{RequestContext, RouteParams};
pub use window::{
    compute_links, LinkDescriptor, LinkKind, LinkSet, PageWindow, PageWindowCalculator,
    PaginationState,
};

/// Full pagination control for one request.
///
/// Rendering takes `&self`: overrides passed to a call apply to that call
/// only. Use [`Paginator::set_defaults`] to change options for later calls.
#[derive(Debug, Clone)]
pub struct Paginator<U = RouteUrlBuilder, R = HtmlLinkRenderer> {
    defaults: DisplayConfig,
    context: RequestContext,
    urls: U,
    renderer: R,
}

impl Paginator {
    /// Create a paginator with default options, URLs rooted at localhost
    pub fn new(context: RequestContext) -> Self {
        Self {
            defaults: DisplayConfig::default(),
            context,
            urls: RouteUrlBuilder::default(),
            renderer: HtmlLinkRenderer,
        }
    }
}

impl<U: UrlBuilder, R: LinkRenderer> Paginator<U, R> {
    /// Create a paginator from all of its parts
    pub fn with_parts(context: RequestContext, defaults: DisplayConfig, urls: U, renderer: R) -> Self {
        Self {
            defaults,
            context,
            urls,
            renderer,
        }
    }

    /// Replace the default options
    pub fn with_config(mut self, defaults: DisplayConfig) -> Self {
        self.defaults = defaults;
        self
    }

    /// Swap the URL builder
    pub fn with_url_builder<U2: UrlBuilder>(self, urls: U2) -> Paginator<U2, R> {
        Paginator {
            defaults: self.defaults,
            context: self.context,
            urls,
            renderer: self.renderer,
        }
    }

    /// Swap the anchor renderer
    pub fn with_renderer<R2: LinkRenderer>(self, renderer: R2) -> Paginator<U, R2> {
        Paginator {
            defaults: self.defaults,
            context: self.context,
            urls: self.urls,
            renderer,
        }
    }

    pub fn defaults(&self) -> &DisplayConfig {
        &self.defaults
    }

    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    /// Merge `overrides` into the stored defaults for every later call
    pub fn set_defaults(&mut self, overrides: &DisplayOverrides) {
        overrides.merge_into(&mut self.defaults);
    }

    /// Options in effect for one call
    pub fn effective_config(&self, overrides: Option<&DisplayOverrides>) -> Cow<'_, DisplayConfig> {
        match overrides {
            Some(o) if !o.is_empty() => Cow::Owned(o.apply(&self.defaults)),
            _ => Cow::Borrowed(&self.defaults),
        }
    }

    /// Link descriptors for the current request
    pub fn links(&self, overrides: Option<&DisplayOverrides>) -> Result<LinkSet> {
        let config = self.effective_config(overrides);
        compute_links(&self.context.pagination_state()?, &config)
    }

    pub fn first(&self, overrides: Option<&DisplayOverrides>) -> Result<String> {
        self.render_with(overrides, |links, markup| markup.fragment(&links.first))
    }

    pub fn prev(&self, overrides: Option<&DisplayOverrides>) -> Result<String> {
        self.render_with(overrides, |links, markup| markup.fragment(&links.prev))
    }

    /// Numbered links around the current page
    pub fn numbers(&self, overrides: Option<&DisplayOverrides>) -> Result<String> {
        self.render_with(overrides, |links, markup| markup.fragments(&links.numbers))
    }

    pub fn next(&self, overrides: Option<&DisplayOverrides>) -> Result<String> {
        self.render_with(overrides, |links, markup| markup.fragment(&links.next))
    }

    pub fn last(&self, overrides: Option<&DisplayOverrides>) -> Result<String> {
        self.render_with(overrides, |links, markup| markup.fragment(&links.last))
    }

    /// Full control: first, prev, numbers, next, last inside the wrapper
    pub fn paginate(&self, overrides: Option<&DisplayOverrides>) -> Result<String> {
        self.render_with(overrides, |links, markup| {
            let content = markup.fragments(&links.sequence(markup.config))?;
            let html = markup.wrap(&content);
            log::debug!(
                "rendered pagination for {}/{} ({} bytes, window of {})",
                markup.route.controller,
                markup.route.action,
                html.len(),
                markup.config.max_numbers,
            );
            Ok(html)
        })
    }

    fn render_with<F>(&self, overrides: Option<&DisplayOverrides>, render: F) -> Result<String>
    where
        F: FnOnce(&LinkSet, &LinkMarkup<'_, U, R>) -> Result<String>,
    {
        let config = self.effective_config(overrides);
        let links = compute_links(&self.context.pagination_state()?, &config)?;
        let route = self.context.route.resolve(&config);
        let query = self.context.link_query();
        let markup = LinkMarkup {
            config: &config,
            route: &route,
            query: &query,
            urls: &self.urls,
            renderer: &self.renderer,
        };
        render(&links, &markup)
    }
}
