use scrollspy::{
    AnimationSlot, AnimationToken, Evaluation, FrameThrottle, ScrollAnimation, ScrollStrategy,
    SectionKey, SectionTracker, SpyOptions,
};

use crate::{ClickOutcome, Page, PageLayout, Trigger};

/// A framework-neutral controller that wraps a `scrollspy::SectionTracker` and provides the
/// page workflows (throttled section tracking, animated scroll fallback).
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `init` once the document is ready
/// - `on_scroll` for every scroll event, then `on_scroll_frame` in the scheduled frame callback
/// - `on_click` for intercepted clicks, then `on_animation_frame` each frame while it returns
///   `true`
#[derive(Clone, Debug)]
pub struct Controller<K> {
    tracker: SectionTracker<K>,
    strategy: ScrollStrategy,
    throttle: FrameThrottle,
    slot: AnimationSlot,
    fragment: Option<K>,
    last: Option<Evaluation>,
}

impl<K: SectionKey + Clone> Controller<K> {
    pub fn new(layout: PageLayout<K>, options: SpyOptions<K>, strategy: ScrollStrategy) -> Self {
        adebug!(?strategy, "Controller::new");
        Self {
            tracker: SectionTracker::new(layout.nav_keys, layout.sections, options),
            strategy,
            throttle: FrameThrottle::new(),
            slot: AnimationSlot::new(),
            fragment: None,
            last: None,
        }
    }

    pub fn tracker(&self) -> &SectionTracker<K> {
        &self.tracker
    }

    pub fn options(&self) -> &SpyOptions<K> {
        self.tracker.options()
    }

    pub fn strategy(&self) -> ScrollStrategy {
        self.strategy
    }

    pub fn is_animating(&self) -> bool {
        self.slot.is_animating()
    }

    pub fn is_frame_pending(&self) -> bool {
        self.throttle.is_pending()
    }

    /// The evaluation applied most recently.
    pub fn last_evaluation(&self) -> Option<Evaluation> {
        self.last
    }

    /// Document-ready setup: writes the displayed year and applies the initial state.
    pub fn init(&mut self, page: &mut impl Page<K>, year: i32) -> Evaluation {
        page.set_year(year);
        self.refresh(page)
    }

    /// Evaluates the page and applies the result (nav bar state, nav item flags).
    pub fn refresh(&mut self, page: &mut impl Page<K>) -> Evaluation {
        let metrics = page.metrics();
        let evaluation = self.tracker.evaluate(&metrics, |i| page.section_rect(i));

        if let Some(at_top) = evaluation.at_top {
            page.set_at_top(at_top);
        }
        self.tracker
            .for_each_nav_flag(&evaluation, |i, active| page.set_nav_active(i, active));

        self.last = Some(evaluation);
        evaluation
    }

    /// Call this for every scroll event.
    ///
    /// Returns `true` when the adapter must schedule a frame callback that calls
    /// `on_scroll_frame`; `false` when one is already pending.
    pub fn on_scroll(&mut self) -> bool {
        self.throttle.request()
    }

    /// Runs the evaluation scheduled by `on_scroll`.
    pub fn on_scroll_frame(&mut self, page: &mut impl Page<K>) -> Evaluation {
        let evaluation = self.refresh(page);
        if self.throttle.is_pending() {
            self.throttle.complete();
        }
        evaluation
    }

    /// Handles a click on one of the fallback triggers.
    ///
    /// With native smooth scrolling every click passes through. Otherwise the default action is
    /// prevented and, when a target exists, an animation is started.
    pub fn on_click(&mut self, page: &mut impl Page<K>, trigger: Trigger) -> ClickOutcome {
        if !self.strategy.is_animated() {
            return ClickOutcome::PassThrough;
        }

        match trigger {
            Trigger::NavItem(index) => {
                let Some(key) = self.tracker.nav_key(index).cloned() else {
                    awarn!(index, "Controller: nav item has no section key");
                    return ClickOutcome::Handled;
                };
                self.scroll_to_element(page, key)
            }
            Trigger::HeaderArrow => {
                let Some(index) = self.tracker.first_section() else {
                    return ClickOutcome::Handled;
                };
                let Some(rect) = page.section_rect(index) else {
                    return ClickOutcome::Handled;
                };
                let fragment = self.tracker.section_key(index).cloned();
                ClickOutcome::Animate(self.start_animation(&*page, rect.top, fragment))
            }
            Trigger::Brand => {
                page.scroll_to_top_smooth();
                ClickOutcome::Handled
            }
            Trigger::CallToAction => {
                let Some(key) = self.options().cta_target.clone() else {
                    return ClickOutcome::PassThrough;
                };
                self.scroll_to_element(page, key)
            }
        }
    }

    fn scroll_to_element(&mut self, page: &mut impl Page<K>, key: K) -> ClickOutcome {
        let Some(top) = page.element_top(&key) else {
            adebug!("Controller: scroll target not found");
            return ClickOutcome::Handled;
        };
        ClickOutcome::Animate(self.start_animation(&*page, top, Some(key)))
    }

    /// Starts an animated scroll toward an element whose viewport-relative top is `rect_top`.
    ///
    /// Supersedes any animation in flight. `fragment` is written to the location once the
    /// animation completes.
    pub fn start_animation(
        &mut self,
        page: &impl Page<K>,
        rect_top: f64,
        fragment: Option<K>,
    ) -> AnimationToken {
        let options = self.tracker.options();
        let from = page.scroll_offset();
        let nav_height = page.nav_height().unwrap_or(0.0);
        let to = ScrollAnimation::target_offset(rect_top, from, nav_height, options.scroll_gap);
        let animation = ScrollAnimation::new(from, to, options.duration_ms, options.easing);
        adebug!(from, to, duration_ms = options.duration_ms, "Controller::start_animation");

        let token = self.slot.start(animation);
        self.fragment = fragment;
        token
    }

    /// Advances the animation owned by `token` at frame timestamp `now_ms`.
    ///
    /// Returns `true` when another frame must be requested. Stale tokens return `false` without
    /// touching the page.
    pub fn on_animation_frame(
        &mut self,
        page: &mut impl Page<K>,
        token: AnimationToken,
        now_ms: f64,
    ) -> bool {
        let Some(frame) = self.slot.step(token, now_ms) else {
            atrace!(
                generation = token.generation(),
                "Controller: no frame for animation"
            );
            return false;
        };
        page.scroll_to(frame.offset);
        if !frame.done {
            return true;
        }

        if let Some(id) = self.fragment.take() {
            page.write_fragment(&id, self.tracker.options().fragment_mode);
        }
        false
    }

    pub fn cancel_animation(&mut self) {
        self.slot.cancel();
        self.fragment = None;
    }
}
