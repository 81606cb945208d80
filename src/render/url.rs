//! Page URL construction

use rustc_hash::FxHashMap;

use crate::error::{PaginateError, Result};
use crate::render::StringTemplate;
use crate::request::RouteParams;

/// Default path of a paginated route
pub const DEFAULT_PAGE_PATH: &str = "/{:controller}/{:action}/page:{:page}";

const PATH_PLACEHOLDERS: [&str; 3] = ["controller", "action", "page"];

/// Resolves the URL of a given page
pub trait UrlBuilder {
    /// Absolute URL for `page` on `route`, carrying `query` as the query string
    fn page_url(&self, page: u64, route: &RouteParams, query: &[(String, String)]) -> Result<String>;
}

/// Builds `{base}/{library}/{controller}/{action}/page:{n}?{query}` URLs
#[derive(Debug, Clone)]
pub struct RouteUrlBuilder {
    base_url: String,
    path: StringTemplate,
}

impl RouteUrlBuilder {
    /// Builder rooted at `base_url` (scheme and host, no trailing slash needed)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            path: StringTemplate::new(DEFAULT_PAGE_PATH),
        }
    }

    /// Replace the path template; `{:controller}`, `{:action}` and `{:page}`
    /// are substituted. The template must contain `{:page}` and no other
    /// placeholder.
    pub fn with_path(mut self, path: impl Into<String>) -> Result<Self> {
        let path = StringTemplate::new(path);
        let placeholders = path.placeholders();
        if let Some(unknown) = placeholders
            .iter()
            .copied()
            .find(|name| !PATH_PLACEHOLDERS.contains(name))
        {
            return Err(PaginateError::invalid(format!(
                "unknown placeholder {{:{}}} in page path {:?}",
                unknown,
                path.source()
            )));
        }
        if !placeholders.contains(&"page") {
            return Err(PaginateError::invalid(format!(
                "page path {:?} has no {{:page}} placeholder",
                path.source()
            )));
        }
        self.path = path;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for RouteUrlBuilder {
    fn default() -> Self {
        Self::new("http://localhost")
    }
}

impl UrlBuilder for RouteUrlBuilder {
    fn page_url(&self, page: u64, route: &RouteParams, query: &[(String, String)]) -> Result<String> {
        if route.controller.is_empty() {
            return Err(PaginateError::MissingRouteParam("controller"));
        }
        if route.action.is_empty() {
            return Err(PaginateError::MissingRouteParam("action"));
        }

        let mut vars = FxHashMap::default();
        vars.insert("controller", urlencoding::encode(&route.controller).into_owned());
        vars.insert("action", urlencoding::encode(&route.action).into_owned());
        vars.insert("page", page.to_string());

        let mut url = self.base_url.clone();
        if let Some(library) = route.library.as_deref().filter(|l| !l.is_empty()) {
            url.push('/');
            url.push_str(&urlencoding::encode(library));
        }
        let path = self.path.render(&vars);
        url.push_str(&path);

        if !query.is_empty() {
            let query_string = query
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            // A custom path may already carry its own query string
            url.push(if path.contains('?') { '&' } else { '?' });
            url.push_str(&query_string);
        }

        Ok(url)
    }
}
