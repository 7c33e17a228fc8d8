//! Menu link model

use serde::{Deserialize, Serialize};

/// Kind of plugin backing a menu link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuLinkKind {
    /// Editor-created content menu link.
    #[default]
    Content,
    /// Link defined in code or module configuration.
    Static,
}

impl MenuLinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Static => "static",
        }
    }
}

/// One node of a navigation menu tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuLink {
    pub plugin_id: String,
    pub menu_name: String,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    /// Plugin id of the parent link, `None` for top-level links.
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub kind: MenuLinkKind,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub weight: i32,
}

fn default_enabled() -> bool {
    true
}
