//! Page router: the only state machine in the desk.
//!
//! Any page is reachable from any page; there is no terminal state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Dashboard,
    RuleBuilder,
    Applications,
    ProductConfig,
    Analytics,
}

impl Page {
    /// Sidebar order.
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::RuleBuilder,
        Page::Applications,
        Page::ProductConfig,
        Page::Analytics,
    ];

    /// Sidebar label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard     => "Dashboard",
            Self::RuleBuilder   => "Rule Builder",
            Self::Applications  => "Applications",
            Self::ProductConfig => "Product Config",
            Self::Analytics     => "Analytics",
        }
    }

    /// Heading shown at the top of the page.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard     => "Executive Overview",
            Self::RuleBuilder   => "Visual Rule Builder",
            Self::Applications  => "Applications Monitor",
            Self::ProductConfig => "Product Configuration",
            Self::Analytics     => "Analytics & Model Insights",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Page {
    type Err = crate::error::DeskError;

    /// Accepts the sidebar label or the snake_case name, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = crate::types::normalize(s);
        Page::ALL
            .into_iter()
            .find(|p| crate::types::normalize(p.label()) == wanted)
            .ok_or_else(|| crate::error::DeskError::UnknownVariant {
                kind:  "page",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Router {
    current: Page,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Page {
        self.current
    }

    /// Select a page. Returns true if the page changed.
    pub fn select(&mut self, page: Page) -> bool {
        if self.current == page {
            return false;
        }
        log::info!("page: {} -> {}", self.current, page);
        self.current = page;
        true
    }
}
