//! Render output: URLs, anchors and wrapper templates

mod markup;
mod template;
mod url;

pub use markup::{HtmlLinkRenderer, LinkMarkup, LinkRenderer};
pub use template::StringTemplate;
pub use url::{RouteUrlBuilder, UrlBuilder, DEFAULT_PAGE_PATH};
