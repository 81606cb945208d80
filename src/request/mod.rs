//! Request adapter: route, query string and raw pagination data of a request

use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;
use crate::error::{PaginateError, Result};
use crate::window::PaginationState;

/// Query parameter never carried over into page links
pub const EXCLUDED_QUERY_PARAM: &str = "url";

/// Route that page links point back to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteParams {
    pub library: Option<String>,
    pub controller: String,
    pub action: String,
}

impl RouteParams {
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            library: None,
            controller: controller.into(),
            action: action.into(),
        }
    }

    pub fn with_library(mut self, library: impl Into<String>) -> Self {
        self.library = Some(library.into());
        self
    }

    /// Route with non-empty values from `config` taking precedence
    pub fn resolve(&self, config: &DisplayConfig) -> RouteParams {
        let pick = |configured: &str, ambient: &str| {
            if configured.is_empty() {
                ambient.to_string()
            } else {
                configured.to_string()
            }
        };
        RouteParams {
            library: config
                .library
                .clone()
                .filter(|l| !l.is_empty())
                .or_else(|| self.library.clone().filter(|l| !l.is_empty())),
            controller: pick(&config.controller, &self.controller),
            action: pick(&config.action, &self.action),
        }
    }
}

/// Everything the paginator needs to know about the inbound request.
///
/// Page, total and limit are kept as received; `pagination_state` validates
/// and normalizes them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestContext {
    pub route: RouteParams,
    /// Query parameters in request order
    pub query: Vec<(String, String)>,
    pub page: Option<i64>,
    pub total: i64,
    pub limit: i64,
}

impl RequestContext {
    pub fn new(route: RouteParams, page: Option<i64>, total: i64, limit: i64) -> Self {
        Self {
            route,
            query: Vec::new(),
            page,
            total,
            limit,
        }
    }

    /// Append a query parameter
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Current page; absent, zero and negative values become page 1
    pub fn current_page(&self) -> u64 {
        match self.page {
            Some(page) if page >= 1 => page as u64,
            _ => 1,
        }
    }

    /// Validated pagination state for this request
    pub fn pagination_state(&self) -> Result<PaginationState> {
        let total = u64::try_from(self.total).map_err(|_| {
            PaginateError::invalid(format!("total must not be negative, got {}", self.total))
        })?;
        let limit = u64::try_from(self.limit)
            .ok()
            .filter(|limit| *limit > 0)
            .ok_or_else(|| {
                PaginateError::invalid(format!("limit must be greater than zero, got {}", self.limit))
            })?;
        Ok(PaginationState::new(self.current_page(), total, limit))
    }

    /// Query parameters to carry into page links, minus `url`
    pub fn link_query(&self) -> Vec<(String, String)> {
        self.query
            .iter()
            .filter(|(key, _)| key != EXCLUDED_QUERY_PARAM)
            .cloned()
            .collect()
    }
}
