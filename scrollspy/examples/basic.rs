use scrollspy::{PageMetrics, SectionRect, SectionTracker, SpyOptions};

fn main() {
    let ids = ["sobre-mi", "proyectos", "contacto"].map(|s| Some(s.to_string()));
    let tracker = SectionTracker::new(ids.to_vec(), ids.to_vec(), SpyOptions::default());

    // Three 700px sections stacked below a 600px header.
    let heights = [700.0, 700.0, 700.0];
    for scroll_offset in [0.0, 450.0, 550.0, 1200.0, 1900.0, 2000.0] {
        let metrics = PageMetrics {
            scroll_offset,
            viewport_height: 800.0,
            document_height: 2900.0,
            header_height: Some(600.0),
            nav_height: 80.0,
            footer_height: Some(200.0),
        };
        let e = tracker.evaluate(&metrics, |i| {
            let top = 600.0 + heights[..i].iter().sum::<f64>() - scroll_offset;
            Some(SectionRect::new(top, top + heights[i]))
        });
        println!(
            "scroll={scroll_offset} at_top={:?} active={:?} nav={:?}",
            e.at_top,
            e.active_section.and_then(|i| tracker.section_key(i)),
            tracker.active_nav(&e)
        );
    }
}
