// Example: frame-driven animated scroll with a superseding second click.
use scrollspy::{AnimationSlot, Easing, ScrollAnimation};

fn main() {
    let mut slot = AnimationSlot::new();
    let mut scroll = 0.0f64;

    let to = ScrollAnimation::target_offset(1800.0, scroll, 80.0, 10.0);
    let mut token = slot.start(ScrollAnimation::new(scroll, to, 800.0, Easing::EaseOutCubic));

    let mut now_ms = 1000.0;
    loop {
        // Simulate a 60fps display refresh.
        now_ms += 16.0;

        let Some(frame) = slot.step(token, now_ms) else {
            break;
        };
        scroll = frame.offset;
        println!("t={now_ms}ms scroll={scroll:.1}");

        // A second click halfway through replaces the running animation.
        if (1400.0..1416.0).contains(&now_ms) {
            let to = ScrollAnimation::target_offset(-900.0, scroll, 80.0, 10.0);
            token = slot.start(ScrollAnimation::new(scroll, to, 400.0, Easing::EaseOutCubic));
        }

        if frame.done {
            break;
        }
    }

    println!("done: scroll={scroll:.1} animating={}", slot.is_animating());
}
