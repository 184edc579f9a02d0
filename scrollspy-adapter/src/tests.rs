use crate::*;

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use scrollspy::{FragmentMode, ScrollStrategy, SectionRect, SpyOptions};

/// An in-memory page: sections stacked in document coordinates plus extra elements by id.
#[derive(Debug)]
struct MockPage {
    scroll: f64,
    viewport: f64,
    document: f64,
    header: Option<f64>,
    nav: Option<f64>,
    footer: Option<f64>,
    /// (id, document top, height)
    sections: Vec<(Option<String>, f64, f64)>,
    /// (id, document top)
    elements: Vec<(String, f64)>,

    at_top: Option<bool>,
    nav_active: Vec<bool>,
    scroll_writes: Vec<f64>,
    smooth_top_calls: usize,
    fragments: Vec<(String, FragmentMode)>,
    year: Option<i32>,
}

impl MockPage {
    /// A 600px header followed by three 700px sections and a 200px footer.
    fn site() -> Self {
        let ids = ["sobre-mi", "proyectos", "contacto"];
        let sections = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (Some(id.to_string()), 600.0 + 700.0 * i as f64, 700.0))
            .collect();
        Self {
            scroll: 0.0,
            viewport: 800.0,
            document: 2900.0,
            header: Some(600.0),
            nav: Some(80.0),
            footer: Some(200.0),
            sections,
            elements: Vec::new(),
            at_top: None,
            nav_active: vec![false; 3],
            scroll_writes: Vec::new(),
            smooth_top_calls: 0,
            fragments: Vec::new(),
            year: None,
        }
    }

    fn layout(&self) -> PageLayout<String> {
        let ids: Vec<Option<String>> = self.sections.iter().map(|(id, ..)| id.clone()).collect();
        PageLayout::new(ids.clone(), ids)
    }

    fn active_count(&self) -> usize {
        self.nav_active.iter().filter(|on| **on).count()
    }
}

impl Page<String> for MockPage {
    fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    fn viewport_height(&self) -> f64 {
        self.viewport
    }

    fn document_height(&self) -> f64 {
        self.document
    }

    fn header_height(&self) -> Option<f64> {
        self.header
    }

    fn nav_height(&self) -> Option<f64> {
        self.nav
    }

    fn footer_height(&self) -> Option<f64> {
        self.footer
    }

    fn section_rect(&self, index: usize) -> Option<SectionRect> {
        let (_, top, height) = self.sections.get(index)?;
        Some(SectionRect::new(top - self.scroll, top + height - self.scroll))
    }

    fn element_top(&self, id: &String) -> Option<f64> {
        let top = self
            .sections
            .iter()
            .find(|(sid, ..)| sid.as_ref() == Some(id))
            .map(|(_, top, _)| *top)
            .or_else(|| {
                self.elements
                    .iter()
                    .find(|(eid, _)| eid == id)
                    .map(|(_, top)| *top)
            })?;
        Some(top - self.scroll)
    }

    fn set_at_top(&mut self, at_top: bool) {
        self.at_top = Some(at_top);
    }

    fn set_nav_active(&mut self, index: usize, active: bool) {
        if let Some(flag) = self.nav_active.get_mut(index) {
            *flag = active;
        }
    }

    fn scroll_to(&mut self, offset: f64) {
        self.scroll = offset;
        self.scroll_writes.push(offset);
    }

    fn scroll_to_top_smooth(&mut self) {
        self.smooth_top_calls += 1;
        self.scroll = 0.0;
    }

    fn write_fragment(&mut self, id: &String, mode: FragmentMode) {
        self.fragments.push((id.clone(), mode));
    }

    fn set_year(&mut self, year: i32) {
        self.year = Some(year);
    }
}

fn animated(page: &MockPage) -> Controller<String> {
    Controller::new(page.layout(), SpyOptions::default(), ScrollStrategy::Animated)
}

fn fragment(id: &str) -> (String, FragmentMode) {
    (id.to_string(), FragmentMode::Push)
}

#[test]
fn init_writes_year_and_initial_state() {
    let mut page = MockPage::site();
    let mut c = animated(&page);

    let e = c.init(&mut page, 2024);
    assert_eq!(page.year, Some(2024));
    assert_eq!(page.at_top, Some(true));
    // The activation line (180px) is still inside the header.
    assert_eq!(e.active_section, None);
    assert_eq!(page.active_count(), 0);
    assert_eq!(c.last_evaluation(), Some(e));
}

#[test]
fn scroll_events_are_throttled_to_one_frame() {
    let mut page = MockPage::site();
    let mut c = animated(&page);
    c.init(&mut page, 2024);

    page.scroll = 700.0;
    assert!(c.on_scroll());
    assert!(!c.on_scroll());
    assert!(!c.on_scroll());
    assert!(c.is_frame_pending());

    let e = c.on_scroll_frame(&mut page);
    assert!(!c.is_frame_pending());
    assert_eq!(e.active_section, Some(0));
    assert_eq!(page.nav_active, vec![true, false, false]);
    assert_eq!(page.at_top, Some(false));

    // The next scroll event schedules a new frame.
    assert!(c.on_scroll());
    page.scroll = 1400.0;
    c.on_scroll_frame(&mut page);
    assert_eq!(page.nav_active, vec![false, true, false]);
}

#[test]
fn near_bottom_highlights_the_last_item() {
    let mut page = MockPage::site();
    let mut c = animated(&page);

    // 800 + 1700 = 2500 > 2900 - 200 - 50 = 2650? No: still the normal scan.
    page.scroll = 1700.0;
    c.refresh(&mut page);
    assert_eq!(page.nav_active, vec![false, true, false]);

    // 800 + 1900 = 2700 > 2650.
    page.scroll = 1900.0;
    c.refresh(&mut page);
    assert_eq!(page.nav_active, vec![false, false, true]);
}

#[test]
fn refresh_is_idempotent() {
    let mut page = MockPage::site();
    let mut c = animated(&page);
    page.scroll = 1000.0;

    let a = c.refresh(&mut page);
    let flags = page.nav_active.clone();
    let at_top = page.at_top;
    let b = c.refresh(&mut page);

    assert_eq!(a, b);
    assert_eq!(page.nav_active, flags);
    assert_eq!(page.at_top, at_top);
    assert_eq!(page.active_count(), 1);
}

#[test]
fn missing_elements_disable_behaviour_quietly() {
    let mut page = MockPage::site();
    page.header = None;
    page.nav = None;
    page.footer = None;
    page.sections.clear();
    page.nav_active = vec![true, true];

    let layout = PageLayout::new(vec![Some("a".to_string()), None], Vec::new());
    let mut c = Controller::new(layout, SpyOptions::default(), ScrollStrategy::Animated);
    let e = c.init(&mut page, 2024);

    assert_eq!(e.at_top, None);
    assert_eq!(page.at_top, None);
    assert_eq!(e.active_section, None);
    assert_eq!(page.nav_active, vec![false, false]);

    assert_eq!(
        c.on_click(&mut page, Trigger::HeaderArrow),
        ClickOutcome::Handled
    );
    assert!(!c.is_animating());
}

#[test]
fn native_strategy_passes_clicks_through() {
    let mut page = MockPage::site();
    let mut c = Controller::new(page.layout(), SpyOptions::default(), ScrollStrategy::Native);

    for trigger in [
        Trigger::NavItem(1),
        Trigger::HeaderArrow,
        Trigger::Brand,
        Trigger::CallToAction,
    ] {
        let outcome = c.on_click(&mut page, trigger);
        assert_eq!(outcome, ClickOutcome::PassThrough);
        assert!(!outcome.prevents_default());
    }
    assert!(page.scroll_writes.is_empty());
    assert_eq!(page.smooth_top_calls, 0);
    assert!(!c.is_animating());
}

#[test]
fn nav_click_animates_to_the_section_and_writes_fragment_once() {
    let mut page = MockPage::site();
    let mut c = animated(&page);

    let outcome = c.on_click(&mut page, Trigger::NavItem(1));
    assert!(outcome.prevents_default());
    let token = outcome.token().unwrap();
    assert!(c.is_animating());

    // 1300 (section top) + 0 (scroll) - 80 (nav) - 10 (gap).
    assert!(c.on_animation_frame(&mut page, token, 1000.0));
    assert_eq!(page.scroll, 0.0);
    assert!(c.on_animation_frame(&mut page, token, 1400.0));
    assert_eq!(page.scroll, 1210.0 * 0.875);
    assert!(page.fragments.is_empty());

    assert!(!c.on_animation_frame(&mut page, token, 1800.0));
    assert_eq!(page.scroll, 1210.0);
    assert_eq!(page.fragments, vec![fragment("proyectos")]);
    assert!(!c.is_animating());

    // No further frames, no second fragment write.
    assert!(!c.on_animation_frame(&mut page, token, 1900.0));
    assert_eq!(page.fragments.len(), 1);
    assert_eq!(page.scroll_writes.len(), 3);
}

#[test]
fn animation_target_accounts_for_current_scroll() {
    let mut page = MockPage::site();
    let mut c = animated(&page);
    page.scroll = 2000.0;

    // Scrolling back up to the first section: 600 - 80 - 10.
    let token = c.on_click(&mut page, Trigger::NavItem(0)).token().unwrap();
    assert!(c.on_animation_frame(&mut page, token, 0.0));
    assert_eq!(page.scroll, 2000.0);
    assert!(!c.on_animation_frame(&mut page, token, 800.0));
    assert_eq!(page.scroll, 510.0);
    assert_eq!(page.fragments, vec![fragment("sobre-mi")]);
}

#[test]
fn header_arrow_targets_the_first_section() {
    let mut page = MockPage::site();
    let mut c = animated(&page);

    let token = c.on_click(&mut page, Trigger::HeaderArrow).token().unwrap();
    assert!(c.on_animation_frame(&mut page, token, 0.0));
    assert!(!c.on_animation_frame(&mut page, token, 800.0));
    assert_eq!(page.scroll, 510.0);
    assert_eq!(page.fragments, vec![fragment("sobre-mi")]);
}

#[test]
fn targets_without_an_id_do_not_touch_the_fragment() {
    let mut page = MockPage::site();
    page.sections[0].0 = None;
    let mut c = animated(&page);

    let token = c.on_click(&mut page, Trigger::HeaderArrow).token().unwrap();
    assert!(c.on_animation_frame(&mut page, token, 0.0));
    assert!(!c.on_animation_frame(&mut page, token, 800.0));
    assert_eq!(page.scroll, 510.0);
    assert!(page.fragments.is_empty());
}

#[test]
fn brand_link_uses_native_smooth_scroll_to_top() {
    let mut page = MockPage::site();
    page.scroll = 1500.0;
    let mut c = animated(&page);

    assert_eq!(c.on_click(&mut page, Trigger::Brand), ClickOutcome::Handled);
    assert_eq!(page.smooth_top_calls, 1);
    assert_eq!(page.scroll, 0.0);
    assert!(!c.is_animating());
}

#[test]
fn call_to_action_scrolls_to_the_configured_target() {
    let mut page = MockPage::site();
    let mut c = animated(&page);

    let token = c.on_click(&mut page, Trigger::CallToAction).token().unwrap();
    assert!(c.on_animation_frame(&mut page, token, 0.0));
    assert!(!c.on_animation_frame(&mut page, token, 800.0));
    assert_eq!(page.scroll, 1910.0);
    assert_eq!(page.fragments, vec![fragment("contacto")]);

    // Any element id works, not only sections.
    page.elements.push(("reservas".to_string(), 400.0));
    page.scroll = 0.0;
    let options = SpyOptions::default().with_cta_target(Some("reservas".to_string()));
    let mut c = Controller::new(page.layout(), options, ScrollStrategy::Animated);
    let token = c.on_click(&mut page, Trigger::CallToAction).token().unwrap();
    assert!(c.on_animation_frame(&mut page, token, 0.0));
    assert!(!c.on_animation_frame(&mut page, token, 800.0));
    assert_eq!(page.scroll, 310.0);
}

#[test]
fn call_to_action_without_target_passes_through() {
    let mut page = MockPage::site();
    let options = SpyOptions::<String>::new();
    let mut c = Controller::new(page.layout(), options, ScrollStrategy::Animated);
    assert_eq!(
        c.on_click(&mut page, Trigger::CallToAction),
        ClickOutcome::PassThrough
    );
}

#[test]
fn missing_targets_prevent_default_without_scrolling() {
    let mut page = MockPage::site();
    let layout = PageLayout::new(
        vec![Some("nope".to_string()), None],
        vec![Some("sobre-mi".to_string())],
    );
    let mut c = Controller::new(layout, SpyOptions::default(), ScrollStrategy::Animated);

    assert_eq!(c.on_click(&mut page, Trigger::NavItem(0)), ClickOutcome::Handled);
    assert_eq!(c.on_click(&mut page, Trigger::NavItem(1)), ClickOutcome::Handled);
    assert_eq!(c.on_click(&mut page, Trigger::NavItem(7)), ClickOutcome::Handled);
    assert!(!c.is_animating());
    assert!(page.scroll_writes.is_empty());
}

#[test]
fn a_new_click_supersedes_the_running_animation() {
    let mut page = MockPage::site();
    let mut c = animated(&page);

    let first = c.on_click(&mut page, Trigger::NavItem(2)).token().unwrap();
    assert!(c.on_animation_frame(&mut page, first, 0.0));
    assert!(c.on_animation_frame(&mut page, first, 400.0));
    let midway = page.scroll;

    let second = c.on_click(&mut page, Trigger::NavItem(0)).token().unwrap();
    assert_ne!(first, second);

    // The old chain stops without writing.
    let writes = page.scroll_writes.len();
    assert!(!c.on_animation_frame(&mut page, first, 416.0));
    assert_eq!(page.scroll_writes.len(), writes);
    assert_eq!(page.scroll, midway);

    assert!(c.on_animation_frame(&mut page, second, 416.0));
    assert!(!c.on_animation_frame(&mut page, second, 1216.0));
    assert_eq!(page.scroll, 510.0);
    assert_eq!(page.fragments, vec![fragment("sobre-mi")]);
}

#[test]
fn zero_duration_lands_on_the_first_frame() {
    let mut page = MockPage::site();
    let options = SpyOptions::default().with_duration_ms(0.0);
    let mut c = Controller::new(page.layout(), options, ScrollStrategy::Animated);

    let token = c.on_click(&mut page, Trigger::NavItem(1)).token().unwrap();
    assert!(!c.on_animation_frame(&mut page, token, 5.0));
    assert_eq!(page.scroll_writes, vec![1210.0]);
    assert_eq!(page.fragments, vec![fragment("proyectos")]);
}

#[test]
fn replace_mode_is_forwarded_to_the_page() {
    let mut page = MockPage::site();
    let options = SpyOptions::default().with_fragment_mode(FragmentMode::Replace);
    let mut c = Controller::new(page.layout(), options, ScrollStrategy::Animated);

    let token = c.on_click(&mut page, Trigger::NavItem(2)).token().unwrap();
    assert!(c.on_animation_frame(&mut page, token, 0.0));
    assert!(!c.on_animation_frame(&mut page, token, 800.0));
    assert_eq!(
        page.fragments,
        vec![("contacto".to_string(), FragmentMode::Replace)]
    );
}

#[test]
fn cancel_animation_drops_the_pending_fragment() {
    let mut page = MockPage::site();
    let mut c = animated(&page);

    let token = c.on_click(&mut page, Trigger::NavItem(1)).token().unwrap();
    assert!(c.on_animation_frame(&mut page, token, 0.0));
    c.cancel_animation();
    assert!(!c.on_animation_frame(&mut page, token, 800.0));
    assert!(page.fragments.is_empty());
}

#[test]
fn selectors_default_to_site_markup() {
    let s = Selectors::default();
    assert_eq!(s.nav_bar, ".top-nav");
    assert_eq!(s.header, "#site-head");
    assert_eq!(s.nav_item, ".nav-item");
    assert_eq!(s.section_attribute, "data-section");
    assert_eq!(s.section, ".post");
    assert_eq!(s.footer, ".site-footer");
    assert_eq!(s.cta_button, "#site-head .cta-button");
    assert_eq!(s.at_top_class, "at-top");
    assert_eq!(s.active_class, "active");

    let s = Selectors::default()
        .with_section("section[id]")
        .with_header("header.hero")
        .with_footer("footer")
        .with_year("#year")
        .with_section_attribute("data-target")
        .with_header_arrow(".hero-arrow")
        .with_brand_link(".brand")
        .with_cta_button(".hero .cta")
        .with_at_top_class("transparent")
        .with_active_class("current");
    assert_eq!(s.section, "section[id]");
    assert_eq!(s.header, "header.hero");
    assert_eq!(s.footer, "footer");
    assert_eq!(s.year, "#year");
    assert_eq!(s.section_attribute, "data-target");
    assert_eq!(s.header_arrow, ".hero-arrow");
    assert_eq!(s.brand_link, ".brand");
    assert_eq!(s.cta_button, ".hero .cta");
    assert_eq!(s.at_top_class, "transparent");
    assert_eq!(s.active_class, "current");
    assert_eq!(s.nav_bar, Selectors::default().nav_bar);
}

#[test]
fn a_deferred_scroll_frame_still_releases_the_throttle() {
    let mut page = MockPage::site();
    let mut c = animated(&page);
    c.init(&mut page, 2024);

    assert!(c.on_scroll());
    // The scheduled frame could not run; later events keep coalescing into it.
    page.scroll = 1400.0;
    assert!(!c.on_scroll());
    assert!(!c.on_scroll());
    assert!(c.is_frame_pending());

    let e = c.on_scroll_frame(&mut page);
    assert_eq!(e.active_section, Some(1));
    assert!(!c.is_frame_pending());
    assert!(c.on_scroll());
}

#[cfg(feature = "serde")]
#[test]
fn selectors_deserialize_missing_fields_to_defaults() {
    let s: Selectors = serde_json::from_str("{}").unwrap();
    assert_eq!(s, Selectors::default());

    let s: Selectors = serde_json::from_str(r#"{"section":"section[id]"}"#).unwrap();
    assert_eq!(s, Selectors::default().with_section("section[id]"));

    let json = serde_json::to_string(&s).unwrap();
    assert_eq!(serde_json::from_str::<Selectors>(&json).unwrap(), s);
}

#[cfg(feature = "web")]
#[test]
fn web_config_keeps_the_call_to_action_default() {
    use crate::web::WebConfig;

    let config: WebConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, WebConfig::default());
    assert_eq!(config.options.cta_target.as_deref(), Some("contacto"));

    let config: WebConfig = serde_json::from_str(r#"{"options":{}}"#).unwrap();
    assert_eq!(config.options, SpyOptions::default());

    let config: WebConfig =
        serde_json::from_str(r#"{"options":{"duration_ms":500},"selectors":{"footer":"footer"}}"#)
            .unwrap();
    assert_eq!(config.options, SpyOptions::default().with_duration_ms(500.0));
    assert_eq!(config.options.cta_target.as_deref(), Some("contacto"));
    assert_eq!(config.selectors, Selectors::default().with_footer("footer"));
}
