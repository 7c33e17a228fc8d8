//! Breadcrumb result model

use serde::{Deserialize, Serialize};

/// One crumb: a label and, unless it marks the current page, a target url.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbLink {
    pub label: String,
    pub url: Option<String>,
}

impl BreadcrumbLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: Some(url.into()),
        }
    }

    /// A crumb without a link target.
    pub fn unlinked(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: None,
        }
    }
}

/// Ordered trail of links from the site root down to the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    links: Vec<BreadcrumbLink>,
}

impl Breadcrumb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_link(&mut self, link: BreadcrumbLink) {
        self.links.push(link);
    }

    pub fn pop_link(&mut self) -> Option<BreadcrumbLink> {
        self.links.pop()
    }

    pub fn links(&self) -> &[BreadcrumbLink] {
        &self.links
    }

    pub fn into_links(self) -> Vec<BreadcrumbLink> {
        self.links
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
