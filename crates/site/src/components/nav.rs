//! Active navigation link highlighting

use web_sys::{window, Document};

use crate::config::NavConfig;
use crate::dom;
use crate::error::{Result, SiteError};

const ARIA_CURRENT: &str = "aria-current";

/// Last `/`-separated segment of a location path
pub fn current_page(pathname: &str) -> &str {
    pathname.rsplit('/').next().unwrap_or("")
}

/// Whether a nav link's `href` points at the current page
pub fn is_current(href: &str, current: &str, home: &str) -> bool {
    href == current || (current.is_empty() && href == home)
}

/// Mark the link for the current page with `aria-current="page"`.
///
/// Returns how many links were marked.
pub fn highlight(doc: &Document, config: &NavConfig) -> Result<usize> {
    let pathname = window().ok_or(SiteError::NoWindow)?.location().pathname()?;
    highlight_path(doc, config, &pathname)
}

/// Same as [`highlight`] with an explicit location path
pub fn highlight_path(doc: &Document, config: &NavConfig, pathname: &str) -> Result<usize> {
    let current = current_page(pathname);
    let mut marked = 0;

    for link in dom::query_all(doc, &config.link_selector)? {
        let href = link.get_attribute("href").unwrap_or_default();
        if is_current(&href, current, &config.home) {
            link.set_attribute(ARIA_CURRENT, "page")?;
            marked += 1;
        } else if link.has_attribute(ARIA_CURRENT) {
            link.remove_attribute(ARIA_CURRENT)?;
        }
    }

    tracing::debug!("nav: {marked} link(s) marked current for {current:?}");
    Ok(marked)
}
