use alloc::vec::Vec;

use scrollspy::{FragmentMode, PageMetrics, SectionRect};

/// The page a [`crate::Controller`] reads from and writes to.
///
/// Implementations hold handles captured once at initialization (nav bar, header, footer,
/// nav items, sections) and answer from the live document. Optional elements that are missing
/// report `None` from the measuring methods and ignore the writing methods.
pub trait Page<K> {
    fn scroll_offset(&self) -> f64;
    fn viewport_height(&self) -> f64;
    fn document_height(&self) -> f64;
    fn header_height(&self) -> Option<f64>;
    fn nav_height(&self) -> Option<f64>;
    fn footer_height(&self) -> Option<f64>;

    /// Viewport-relative rectangle of content section `index` (document order).
    fn section_rect(&self, index: usize) -> Option<SectionRect>;

    /// Viewport-relative top edge of the element with id `id`.
    fn element_top(&self, id: &K) -> Option<f64>;

    fn set_at_top(&mut self, at_top: bool);
    fn set_nav_active(&mut self, index: usize, active: bool);

    /// Jumps to a vertical scroll offset.
    fn scroll_to(&mut self, offset: f64);

    /// Scrolls to offset 0 using the environment's own smooth scrolling.
    fn scroll_to_top_smooth(&mut self);

    /// Writes `#id` into the location without navigating.
    fn write_fragment(&mut self, id: &K, mode: FragmentMode);

    fn set_year(&mut self, year: i32);

    fn metrics(&self) -> PageMetrics {
        PageMetrics {
            scroll_offset: self.scroll_offset(),
            viewport_height: self.viewport_height(),
            document_height: self.document_height(),
            header_height: self.header_height(),
            nav_height: self.nav_height().unwrap_or(0.0),
            footer_height: self.footer_height(),
        }
    }
}

/// The navigation items and content sections of a page, captured once.
///
/// Rebuilding requires a new controller; dynamic content changes are not tracked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageLayout<K> {
    /// Section key of each nav item, document order.
    pub nav_keys: Vec<Option<K>>,
    /// Id of each content section, document order.
    pub sections: Vec<Option<K>>,
}

impl<K> PageLayout<K> {
    pub fn new(nav_keys: Vec<Option<K>>, sections: Vec<Option<K>>) -> Self {
        Self { nav_keys, sections }
    }
}
