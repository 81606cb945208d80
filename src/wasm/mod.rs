//! WASM bindings for the paginator

use wasm_bindgen::prelude::*;

use crate::{
    compute_links, DisplayConfig, DisplayOverrides, PaginateError, Paginator, RequestContext,
    RouteParams, RouteUrlBuilder,
};

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js(err: PaginateError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_overrides(json: Option<&str>) -> crate::Result<Option<DisplayOverrides>> {
    match json.map(str::trim) {
        Some(json) if !json.is_empty() => Ok(Some(DisplayOverrides::from_json(json)?)),
        _ => Ok(None),
    }
}

// JS numbers are doubles; only whole values that fit in an i64 are record counts.
fn total_from_js(total: f64) -> crate::Result<i64> {
    if !total.is_finite() || total.fract() != 0.0 {
        return Err(PaginateError::invalid(format!(
            "total must be a whole number, got {}",
            total
        )));
    }
    if total < i64::MIN as f64 || total >= i64::MAX as f64 {
        return Err(PaginateError::invalid(format!("total {} is out of range", total)));
    }
    Ok(total as i64)
}

/// WASM-exposed paginator.
///
/// Holds default options and the site base URL; every render call receives
/// the request data explicitly.
#[wasm_bindgen]
pub struct WasmPaginator {
    defaults: DisplayConfig,
    base_url: String,
}

#[wasm_bindgen]
impl WasmPaginator {
    /// Create a paginator with default options
    #[wasm_bindgen(constructor)]
    pub fn new(base_url: &str) -> Self {
        Self {
            defaults: DisplayConfig::default(),
            base_url: base_url.to_string(),
        }
    }

    /// Create a paginator from a JSON `DisplayConfig`
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(base_url: &str, config_json: &str) -> Result<WasmPaginator, JsValue> {
        let defaults = DisplayConfig::from_json(config_json).map_err(to_js)?;
        Ok(Self {
            defaults,
            base_url: base_url.to_string(),
        })
    }

    /// Merge JSON overrides into the defaults used by later calls
    #[wasm_bindgen(js_name = setDefaults)]
    pub fn set_defaults(&mut self, overrides_json: &str) -> Result<(), JsValue> {
        self.merge_defaults(overrides_json).map_err(to_js)
    }

    /// Render the full control for a controller/action route
    pub fn paginate(
        &self,
        controller: &str,
        action: &str,
        page: i32,
        total: f64,
        limit: i32,
        overrides_json: Option<String>,
    ) -> Result<String, JsValue> {
        total_from_js(total)
            .and_then(|total| {
                let context = RequestContext::new(
                    RouteParams::new(controller, action),
                    Some(i64::from(page)),
                    total,
                    i64::from(limit),
                );
                self.render(context, overrides_json.as_deref())
            })
            .map_err(to_js)
    }

    /// Render the full control from a JSON `RequestContext`
    #[wasm_bindgen(js_name = paginateRequest)]
    pub fn paginate_request(
        &self,
        context_json: &str,
        overrides_json: Option<String>,
    ) -> Result<String, JsValue> {
        let context: RequestContext = serde_json::from_str(context_json)
            .map_err(PaginateError::from)
            .map_err(to_js)?;
        self.render(context, overrides_json.as_deref()).map_err(to_js)
    }

    /// Link descriptors as JSON
    #[wasm_bindgen(js_name = computeLinks)]
    pub fn compute_links_json(&self, page: i32, total: f64, limit: i32) -> Result<String, JsValue> {
        total_from_js(total)
            .and_then(|total| {
                let context = RequestContext::new(
                    RouteParams::default(),
                    Some(i64::from(page)),
                    total,
                    i64::from(limit),
                );
                self.links_json(&context)
            })
            .map_err(to_js)
    }

    /// Current default options as JSON
    #[wasm_bindgen(js_name = getDefaults)]
    pub fn get_defaults(&self) -> String {
        serde_json::to_string(&self.defaults).unwrap_or_default()
    }
}

impl WasmPaginator {
    fn merge_defaults(&mut self, overrides_json: &str) -> crate::Result<()> {
        if let Some(overrides) = parse_overrides(Some(overrides_json))? {
            overrides.merge_into(&mut self.defaults);
        }
        Ok(())
    }

    fn render(&self, context: RequestContext, overrides_json: Option<&str>) -> crate::Result<String> {
        let overrides = parse_overrides(overrides_json)?;
        Paginator::new(context)
            .with_config(self.defaults.clone())
            .with_url_builder(RouteUrlBuilder::new(self.base_url.as_str()))
            .paginate(overrides.as_ref())
    }

    fn links_json(&self, context: &RequestContext) -> crate::Result<String> {
        let links = compute_links(&context.pagination_state()?, &self.defaults)?;
        Ok(serde_json::to_string(&links)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate() {
        let paginator = WasmPaginator::new("https://example.com");
        let html = paginator
            .paginate("posts", "index", 1, 25.0, 10, None)
            .unwrap();
        assert!(html.starts_with("<ul>"));
        assert!(html.contains("https://example.com/posts/index/page:2"));
    }

    #[test]
    fn test_set_defaults_and_overrides() {
        let mut paginator = WasmPaginator::new("https://example.com");
        paginator.merge_defaults(r#"{"showNumbers":false}"#).unwrap();
        let html = paginator
            .paginate("posts", "index", 2, 25.0, 10, Some(r#"{"nextText":"More"}"#.into()))
            .unwrap();
        assert!(html.contains(">More<"));
        assert!(!html.contains(">2<"));
        assert!(paginator.get_defaults().contains(r#""showNumbers":false"#));
    }

    #[test]
    fn test_bad_overrides_are_errors() {
        let mut paginator = WasmPaginator::new("https://example.com");
        assert!(paginator.merge_defaults("{").is_err());
        assert!(paginator.merge_defaults("  ").is_ok());
    }

    #[test]
    fn test_total_from_js() {
        assert_eq!(total_from_js(95.0).unwrap(), 95);
        assert_eq!(total_from_js(0.0).unwrap(), 0);
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1.5, 1e19, -1e19] {
            assert!(matches!(
                total_from_js(bad),
                Err(PaginateError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_paginate_request() {
        let paginator = WasmPaginator::new("https://example.com");
        let context = r#"{
            "route": {"controller": "posts", "action": "index"},
            "query": [["url", "posts"], ["sort", "date"]],
            "page": 2,
            "total": 40,
            "limit": 10
        }"#;
        let html = paginator.paginate_request(context, None).unwrap();
        assert!(html.contains("page:3?sort=date"));
        assert!(!html.contains("url="));
    }

    #[test]
    fn test_links_json() {
        let paginator = WasmPaginator::new("https://example.com");
        let context = RequestContext::new(RouteParams::default(), Some(1), 0, 10);
        let json = paginator.links_json(&context).unwrap();
        assert!(json.contains(r#""numbers":[]"#));
        assert!(json.contains(r#""first":{"kind":"first","targetPage":1,"enabled":false"#));
    }
}
