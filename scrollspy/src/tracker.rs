use alloc::vec::Vec;
use core::borrow::Borrow;

use crate::key::SectionKey;
use crate::{Evaluation, PageMetrics, SectionMap, SectionRect, SpyOptions};

/// Decides which content section is active for a given scroll position.
///
/// The tracker is UI-agnostic:
/// - It holds the navigation item keys and section ids captured once at initialization.
/// - Your adapter provides a [`PageMetrics`] snapshot and a way to measure each section.
/// - It returns an [`Evaluation`]; applying it to the page is up to the adapter.
///
/// Evaluation is pure, so repeated calls with the same inputs always agree.
#[derive(Clone, Debug)]
pub struct SectionTracker<K> {
    options: SpyOptions<K>,
    nav_keys: Vec<Option<K>>,
    sections: Vec<Option<K>>,
    map: SectionMap<K>,
}

impl<K: SectionKey + Clone> SectionTracker<K> {
    /// Creates a tracker.
    ///
    /// `nav_keys` are the section keys of the navigation items in document order (`None` for an
    /// item without a key). `sections` are the content section ids in document order (`None`
    /// for a section without an id).
    pub fn new(
        nav_keys: Vec<Option<K>>,
        sections: Vec<Option<K>>,
        options: SpyOptions<K>,
    ) -> Self {
        let map = SectionMap::new(nav_keys.iter().cloned());
        sdebug!(
            nav_items = nav_keys.len(),
            sections = sections.len(),
            "SectionTracker::new"
        );
        Self {
            options,
            nav_keys,
            sections,
            map,
        }
    }
}

impl<K: SectionKey> SectionTracker<K> {
    pub fn options(&self) -> &SpyOptions<K> {
        &self.options
    }

    pub fn section_map(&self) -> &SectionMap<K> {
        &self.map
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn nav_count(&self) -> usize {
        self.nav_keys.len()
    }

    pub fn section_key(&self, index: usize) -> Option<&K> {
        self.sections.get(index)?.as_ref()
    }

    pub fn nav_key(&self, index: usize) -> Option<&K> {
        self.nav_keys.get(index)?.as_ref()
    }

    pub fn first_section(&self) -> Option<usize> {
        (!self.sections.is_empty()).then_some(0)
    }

    pub fn last_section(&self) -> Option<usize> {
        self.sections.len().checked_sub(1)
    }

    /// Index of the first section whose id equals `key`.
    pub fn section_index<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: SectionKey + ?Sized,
    {
        self.sections
            .iter()
            .position(|s| s.as_ref().is_some_and(|s| <K as Borrow<Q>>::borrow(s) == key))
    }

    /// Whether the nav bar should carry the "at top" state.
    ///
    /// Returns `None` when the page has no header.
    pub fn is_at_top(&self, metrics: &PageMetrics) -> Option<bool> {
        let header_height = metrics.header_height?;
        Some(metrics.scroll_offset < header_height - self.options.top_buffer)
    }

    /// Whether the viewport has reached the footer zone where the last section is forced active.
    pub fn is_near_bottom(&self, metrics: &PageMetrics) -> bool {
        let footer_height = metrics.footer_height.unwrap_or(0.0);
        metrics.viewport_bottom()
            > metrics.document_height - footer_height - self.options.bottom_threshold
    }

    /// Runs one evaluation.
    ///
    /// `rect_of(i)` measures section `i` relative to the viewport; returning `None` skips that
    /// section. Sections are scanned in document order and the last one crossing the activation
    /// line wins.
    pub fn evaluate(
        &self,
        metrics: &PageMetrics,
        mut rect_of: impl FnMut(usize) -> Option<SectionRect>,
    ) -> Evaluation {
        let at_top = self.is_at_top(metrics);

        let active_section = if self.sections.is_empty() {
            None
        } else if self.is_near_bottom(metrics) {
            self.last_section()
        } else {
            let line = self.options.activation_line(metrics.nav_height);
            let mut active = None;
            for index in 0..self.sections.len() {
                let Some(rect) = rect_of(index) else {
                    continue;
                };
                if rect.contains_line(line) {
                    if active.is_some() {
                        strace!(index, "SectionTracker: overlapping sections, later wins");
                    }
                    active = Some(index);
                }
            }
            active
        };

        strace!(
            scroll_offset = metrics.scroll_offset,
            ?at_top,
            ?active_section,
            "SectionTracker::evaluate"
        );
        Evaluation {
            at_top,
            active_section,
        }
    }

    /// The nav item to mark active for an evaluation, if the active section has one.
    pub fn active_nav(&self, evaluation: &Evaluation) -> Option<usize> {
        let index = evaluation.active_section?;
        let key = self.section_key(index)?;
        self.map.nav_index(key)
    }

    /// Visits every nav item with its desired active flag.
    ///
    /// Every item is visited (clearing all flags first, then setting the active one), so
    /// applying the result twice leaves the page unchanged.
    pub fn for_each_nav_flag(&self, evaluation: &Evaluation, mut f: impl FnMut(usize, bool)) {
        let active = self.active_nav(evaluation);
        for index in 0..self.nav_keys.len() {
            f(index, active == Some(index));
        }
    }
}
