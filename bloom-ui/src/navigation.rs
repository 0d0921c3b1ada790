//! Top-level page selection.

use log::debug;

/// The six top-level views, in navigation bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Landing,
    Seasonal,
    Global,
    Applications,
    Data,
    About,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Landing,
        Page::Seasonal,
        Page::Global,
        Page::Applications,
        Page::Data,
        Page::About,
    ];

    /// Tab caption.
    pub fn label(self) -> &'static str {
        match self {
            Page::Landing => "Home",
            Page::Seasonal => "Seasonal Patterns",
            Page::Global => "Global Activity",
            Page::Applications => "Applications",
            Page::Data => "Data Sources",
            Page::About => "About",
        }
    }

    /// Stable tag, also used for the DOM id of the rendered page.
    pub fn slug(self) -> &'static str {
        match self {
            Page::Landing => "landing",
            Page::Seasonal => "seasonal",
            Page::Global => "global",
            Page::Applications => "applications",
            Page::Data => "data",
            Page::About => "about",
        }
    }
}

/// Which page is showing. Any page can be selected from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigation {
    current: Page,
}

impl Navigation {
    pub fn at(page: Page) -> Self {
        Self { current: page }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.current == page
    }

    pub fn select(&mut self, page: Page) {
        debug!("Navigating from {} to {}", self.current.slug(), page.slug());
        self.current = page;
    }
}
