// Example: drive a Controller against a simulated page (no browser needed).
use scrollspy::{FragmentMode, ScrollStrategy, SectionRect, SpyOptions};
use scrollspy_adapter::{Controller, Page, PageLayout, Trigger};

struct SimPage {
    scroll: f64,
    sections: Vec<(String, f64, f64)>,
    active: Vec<bool>,
}

impl Page<String> for SimPage {
    fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    fn viewport_height(&self) -> f64 {
        800.0
    }

    fn document_height(&self) -> f64 {
        2900.0
    }

    fn header_height(&self) -> Option<f64> {
        Some(600.0)
    }

    fn nav_height(&self) -> Option<f64> {
        Some(80.0)
    }

    fn footer_height(&self) -> Option<f64> {
        None
    }

    fn section_rect(&self, index: usize) -> Option<SectionRect> {
        let (_, top, height) = self.sections.get(index)?;
        Some(SectionRect::new(top - self.scroll, top + height - self.scroll))
    }

    fn element_top(&self, id: &String) -> Option<f64> {
        let (_, top, _) = self.sections.iter().find(|(sid, ..)| sid == id)?;
        Some(top - self.scroll)
    }

    fn set_at_top(&mut self, at_top: bool) {
        println!("  nav bar at-top={at_top}");
    }

    fn set_nav_active(&mut self, index: usize, active: bool) {
        self.active[index] = active;
    }

    fn scroll_to(&mut self, offset: f64) {
        self.scroll = offset;
    }

    fn scroll_to_top_smooth(&mut self) {
        self.scroll = 0.0;
    }

    fn write_fragment(&mut self, id: &String, mode: FragmentMode) {
        println!("  fragment #{id} ({mode:?})");
    }

    fn set_year(&mut self, year: i32) {
        println!("  year={year}");
    }
}

fn main() {
    let ids = ["sobre-mi", "proyectos", "contacto"];
    let mut page = SimPage {
        scroll: 0.0,
        sections: ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.to_string(), 600.0 + 700.0 * i as f64, 700.0))
            .collect(),
        active: vec![false; ids.len()],
    };
    let keys: Vec<Option<String>> = ids.iter().map(|s| Some(s.to_string())).collect();
    let layout = PageLayout::new(keys.clone(), keys);

    let mut c = Controller::new(layout, SpyOptions::default(), ScrollStrategy::Animated);
    c.init(&mut page, 2025);

    let outcome = c.on_click(&mut page, Trigger::NavItem(2));
    let Some(token) = outcome.token() else {
        return;
    };

    let mut now_ms = 0.0;
    while c.on_animation_frame(&mut page, token, now_ms) {
        // Scroll events fired by the animation are coalesced per frame.
        if c.on_scroll() {
            c.on_scroll_frame(&mut page);
        }
        now_ms += 16.0;
    }
    c.refresh(&mut page);

    println!("scroll={} active={:?}", page.scroll, page.active);
}
