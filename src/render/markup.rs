//! Descriptor to markup mapping

use crate::config::DisplayConfig;
use crate::error::Result;
use crate::render::{StringTemplate, UrlBuilder};
use crate::request::RouteParams;
use crate::window::{LinkDescriptor, LinkKind};

/// Turns link text and a URL into an anchor fragment
pub trait LinkRenderer {
    fn anchor(&self, text: &str, url: &str) -> String;
}

/// Plain `<a href="...">text</a>` anchors; text is emitted verbatim
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlLinkRenderer;

impl LinkRenderer for HtmlLinkRenderer {
    fn anchor(&self, text: &str, url: &str) -> String {
        format!(r#"<a href="{}">{}</a>"#, url, text)
    }
}

/// Everything needed to render descriptors for one call
pub struct LinkMarkup<'a, U: UrlBuilder, R: LinkRenderer> {
    pub config: &'a DisplayConfig,
    pub route: &'a RouteParams,
    pub query: &'a [(String, String)],
    pub urls: &'a U,
    pub renderer: &'a R,
}

impl<'a, U: UrlBuilder, R: LinkRenderer> LinkMarkup<'a, U, R> {
    /// Markup for one descriptor.
    ///
    /// Disabled links render as their disabled text, unwrapped.
    pub fn fragment(&self, link: &LinkDescriptor) -> Result<String> {
        if !link.enabled {
            return Ok(self.config.text_for(link.kind, false).to_string());
        }

        let url = self.urls.page_url(link.target_page, self.route, self.query)?;
        let anchor = match link.kind {
            LinkKind::Number => self.renderer.anchor(&link.target_page.to_string(), &url),
            kind => self.renderer.anchor(self.config.text_for(kind, true), &url),
        };
        log::trace!("{:?} -> page {} ({})", link.kind, link.target_page, url);

        Ok(format!(
            "{}{}{}",
            self.config.open_tag_for(link.is_active),
            anchor,
            self.config.close_tag
        ))
    }

    /// Concatenated markup for a run of descriptors
    pub fn fragments<'l>(&self, links: impl IntoIterator<Item = &'l LinkDescriptor>) -> Result<String> {
        let mut out = String::new();
        for link in links {
            out.push_str(&self.fragment(link)?);
        }
        Ok(out)
    }

    /// Place `content` inside the configured wrapper
    pub fn wrap(&self, content: &str) -> String {
        StringTemplate::new(self.config.wrapper.as_str()).render_one("content", content)
    }
}
