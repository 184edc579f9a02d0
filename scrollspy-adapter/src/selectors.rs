use alloc::string::String;

/// CSS selectors, attribute and class names used to find and style the page elements.
///
/// Defaults match the site's markup. With `feature = "serde"`, missing fields fall back to
/// their defaults when deserializing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Selectors {
    pub nav_bar: String,
    pub header: String,
    pub nav_item: String,
    /// Attribute on a nav item holding the id of its section.
    pub section_attribute: String,
    pub section: String,
    pub footer: String,
    pub year: String,
    pub header_arrow: String,
    pub brand_link: String,
    pub cta_button: String,
    pub at_top_class: String,
    pub active_class: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav_bar: ".top-nav".into(),
            header: "#site-head".into(),
            nav_item: ".nav-item".into(),
            section_attribute: "data-section".into(),
            section: ".post".into(),
            footer: ".site-footer".into(),
            year: "#current-year".into(),
            header_arrow: "#header-arrow".into(),
            brand_link: ".nav-brand a".into(),
            cta_button: "#site-head .cta-button".into(),
            at_top_class: "at-top".into(),
            active_class: "active".into(),
        }
    }
}

impl Selectors {
    pub fn with_nav_bar(mut self, selector: impl Into<String>) -> Self {
        self.nav_bar = selector.into();
        self
    }

    pub fn with_header(mut self, selector: impl Into<String>) -> Self {
        self.header = selector.into();
        self
    }

    pub fn with_nav_item(mut self, selector: impl Into<String>) -> Self {
        self.nav_item = selector.into();
        self
    }

    pub fn with_section(mut self, selector: impl Into<String>) -> Self {
        self.section = selector.into();
        self
    }

    pub fn with_footer(mut self, selector: impl Into<String>) -> Self {
        self.footer = selector.into();
        self
    }

    pub fn with_year(mut self, selector: impl Into<String>) -> Self {
        self.year = selector.into();
        self
    }

    pub fn with_section_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.section_attribute = attribute.into();
        self
    }

    pub fn with_header_arrow(mut self, selector: impl Into<String>) -> Self {
        self.header_arrow = selector.into();
        self
    }

    pub fn with_brand_link(mut self, selector: impl Into<String>) -> Self {
        self.brand_link = selector.into();
        self
    }

    pub fn with_cta_button(mut self, selector: impl Into<String>) -> Self {
        self.cta_button = selector.into();
        self
    }

    pub fn with_at_top_class(mut self, class: impl Into<String>) -> Self {
        self.at_top_class = class.into();
        self
    }

    pub fn with_active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }
}
