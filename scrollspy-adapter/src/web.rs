//! Browser binding: drives a [`Controller`] from a live document through `web-sys`.
//!
//! `install` waits for the document to be ready, captures the page elements once, picks the
//! scroll strategy from feature detection, then wires:
//! - a scroll listener throttled to one evaluation per animation frame
//! - click listeners on the fallback triggers (only when native smooth scrolling is missing)

use std::cell::RefCell;
use std::rc::Rc;

use scrollspy::{AnimationToken, FragmentMode, ScrollStrategy, SectionRect, SpyOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::{ClickOutcome, Controller, Page, PageLayout, Selectors, Trigger};

/// Configuration accepted by [`install_json`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub selectors: Selectors,
    pub options: SpyOptions<String>,
}

fn js_error(msg: &str) -> JsValue {
    JsValue::from_str(msg)
}

fn query<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<T>()
        .ok()
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        awarn!(selector, "web: invalid selector");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn offset_height(element: Option<&HtmlElement>) -> Option<f64> {
    element.map(|e| f64::from(e.offset_height()))
}

fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

/// A [`Page`] backed by `web-sys` handles captured at initialization.
pub struct DomPage {
    window: Window,
    document: Document,
    selectors: Selectors,
    nav_bar: Option<HtmlElement>,
    header: Option<HtmlElement>,
    footer: Option<HtmlElement>,
    year: Option<Element>,
    nav_items: Vec<Element>,
    sections: Vec<Element>,
}

impl DomPage {
    pub fn capture(window: Window, selectors: Selectors) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| js_error("scrollspy: window has no document"))?;

        let page = Self {
            nav_bar: query(&document, &selectors.nav_bar),
            header: query(&document, &selectors.header),
            footer: query(&document, &selectors.footer),
            year: query(&document, &selectors.year),
            nav_items: query_all(&document, &selectors.nav_item),
            sections: query_all(&document, &selectors.section),
            window,
            document,
            selectors,
        };
        adebug!(
            nav_items = page.nav_items.len(),
            sections = page.sections.len(),
            has_nav_bar = page.nav_bar.is_some(),
            has_header = page.header.is_some(),
            has_footer = page.footer.is_some(),
            "DomPage::capture"
        );
        Ok(page)
    }

    /// Nav item keys and section ids, in document order. Empty values count as missing.
    pub fn layout(&self) -> PageLayout<String> {
        let nav_keys = self
            .nav_items
            .iter()
            .map(|e| {
                e.get_attribute(&self.selectors.section_attribute)
                    .filter(|s| !s.is_empty())
            })
            .collect();
        let sections = self
            .sections
            .iter()
            .map(|e| Some(e.id()).filter(|s| !s.is_empty()))
            .collect();
        PageLayout::new(nav_keys, sections)
    }

    /// Whether the root element's style exposes `scrollBehavior`.
    pub fn supports_smooth_scroll(&self) -> bool {
        let Some(root) = self
            .document
            .document_element()
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        else {
            return false;
        };
        let style = root.style();
        js_sys::Reflect::has(&style, &JsValue::from_str("scrollBehavior")).unwrap_or(false)
    }

    /// Elements whose clicks the animated fallback intercepts, with their triggers.
    pub fn triggers(&self) -> Vec<(Element, Trigger)> {
        let mut out: Vec<(Element, Trigger)> = self
            .nav_items
            .iter()
            .enumerate()
            .map(|(i, e)| (e.clone(), Trigger::NavItem(i)))
            .collect();
        let optional = [
            (&self.selectors.header_arrow, Trigger::HeaderArrow),
            (&self.selectors.brand_link, Trigger::Brand),
            (&self.selectors.cta_button, Trigger::CallToAction),
        ];
        for (selector, trigger) in optional {
            if let Some(element) = query::<Element>(&self.document, selector) {
                out.push((element, trigger));
            }
        }
        out
    }
}

impl Page<String> for DomPage {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn document_height(&self) -> f64 {
        self.document
            .document_element()
            .map(|e| f64::from(e.scroll_height()))
            .unwrap_or(0.0)
    }

    fn header_height(&self) -> Option<f64> {
        offset_height(self.header.as_ref())
    }

    fn nav_height(&self) -> Option<f64> {
        offset_height(self.nav_bar.as_ref())
    }

    fn footer_height(&self) -> Option<f64> {
        offset_height(self.footer.as_ref())
    }

    fn section_rect(&self, index: usize) -> Option<SectionRect> {
        let rect = self.sections.get(index)?.get_bounding_client_rect();
        Some(SectionRect::new(rect.top(), rect.bottom()))
    }

    fn element_top(&self, id: &String) -> Option<f64> {
        let element = self.document.get_element_by_id(id)?;
        Some(element.get_bounding_client_rect().top())
    }

    fn set_at_top(&mut self, at_top: bool) {
        if let Some(nav_bar) = &self.nav_bar {
            set_class(nav_bar, &self.selectors.at_top_class, at_top);
        }
    }

    fn set_nav_active(&mut self, index: usize, active: bool) {
        if let Some(item) = self.nav_items.get(index) {
            set_class(item, &self.selectors.active_class, active);
        }
    }

    fn scroll_to(&mut self, offset: f64) {
        self.window.scroll_to_with_x_and_y(0.0, offset);
    }

    fn scroll_to_top_smooth(&mut self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn write_fragment(&mut self, id: &String, mode: FragmentMode) {
        let Ok(history) = self.window.history() else {
            return;
        };
        let url = format!("#{id}");
        let result = match mode {
            FragmentMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(&url)),
            FragmentMode::Replace => {
                history.replace_state_with_url(&JsValue::NULL, "", Some(&url))
            }
        };
        if result.is_err() {
            awarn!(%url, "web: failed to write location fragment");
        }
    }

    fn set_year(&mut self, year: i32) {
        if let Some(element) = &self.year {
            element.set_text_content(Some(&year.to_string()));
        }
    }
}

struct App {
    controller: Controller<String>,
    page: DomPage,
}

type SharedApp = Rc<RefCell<App>>;

/// Installs the scroll spy once the document is ready.
pub fn install(selectors: Selectors, options: SpyOptions<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let window = web_sys::window().ok_or_else(|| js_error("scrollspy: no window"))?;
    let document = window
        .document()
        .ok_or_else(|| js_error("scrollspy: window has no document"))?;

    if document.ready_state() != "loading" {
        return setup(window, selectors, options);
    }

    let ready = Closure::once_into_js(move || {
        if let Err(err) = setup(window, selectors, options) {
            web_sys::console::error_1(&err);
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", ready.unchecked_ref())
}

/// [`install`] with a JSON [`WebConfig`]; missing fields use the defaults.
#[wasm_bindgen(js_name = installScrollSpy)]
pub fn install_json(config: &str) -> Result<(), JsValue> {
    let config: WebConfig = if config.trim().is_empty() {
        WebConfig::default()
    } else {
        serde_json::from_str(config).map_err(|err| js_error(&err.to_string()))?
    };
    install(config.selectors, config.options)
}

#[cfg(feature = "autostart")]
#[wasm_bindgen(start)]
fn start() -> Result<(), JsValue> {
    install(Selectors::default(), SpyOptions::default())
}

fn setup(
    window: Window,
    selectors: Selectors,
    options: SpyOptions<String>,
) -> Result<(), JsValue> {
    let page = DomPage::capture(window.clone(), selectors)?;
    let strategy = ScrollStrategy::detect(page.supports_smooth_scroll());
    let controller = Controller::new(page.layout(), options, strategy);
    let triggers = if strategy.is_animated() {
        page.triggers()
    } else {
        Vec::new()
    };

    let app = Rc::new(RefCell::new(App { controller, page }));
    {
        let mut guard = app.borrow_mut();
        let App { controller, page } = &mut *guard;
        controller.init(page, js_sys::Date::new_0().get_full_year() as i32);
    }

    wire_scroll(&window, &app)?;
    for (element, trigger) in triggers {
        wire_click(&window, &app, &element, trigger)?;
    }
    Ok(())
}

fn wire_scroll(window: &Window, app: &SharedApp) -> Result<(), JsValue> {
    let handler = {
        let app = Rc::clone(app);
        let window = window.clone();
        Closure::<dyn FnMut()>::new(move || {
            let Ok(mut guard) = app.try_borrow_mut() else {
                return;
            };
            if guard.controller.on_scroll() {
                drop(guard);
                if request_scroll_frame(&window, &app).is_err() {
                    awarn!("web: requestAnimationFrame failed, evaluating inline");
                    run_scroll_frame(&window, &app);
                }
            }
        })
    };
    window.add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    handler.forget();
    Ok(())
}

fn request_scroll_frame(window: &Window, app: &SharedApp) -> Result<i32, JsValue> {
    let frame = {
        let app = Rc::clone(app);
        let window = window.clone();
        Closure::once_into_js(move |_now: f64| run_scroll_frame(&window, &app))
    };
    window.request_animation_frame(frame.unchecked_ref())
}

/// Runs a scheduled scroll evaluation. The throttle stays pending until this gets the
/// controller, so a busy controller pushes the evaluation to the next frame.
fn run_scroll_frame(window: &Window, app: &SharedApp) {
    let Ok(mut guard) = app.try_borrow_mut() else {
        atrace!("web: controller busy, deferring scroll frame");
        if request_scroll_frame(window, app).is_err() {
            awarn!("web: requestAnimationFrame failed, scroll frame dropped");
        }
        return;
    };
    let App { controller, page } = &mut *guard;
    controller.on_scroll_frame(page);
}

fn wire_click(
    window: &Window,
    app: &SharedApp,
    element: &Element,
    trigger: Trigger,
) -> Result<(), JsValue> {
    let handler = {
        let app = Rc::clone(app);
        let window = window.clone();
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let outcome = {
                let Ok(mut guard) = app.try_borrow_mut() else {
                    return;
                };
                let App { controller, page } = &mut *guard;
                controller.on_click(page, trigger)
            };
            if outcome.prevents_default() {
                event.prevent_default();
            }
            if let ClickOutcome::Animate(token) = outcome {
                request_animation_step(&window, &app, token);
            }
        })
    };
    element.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

fn request_animation_step(window: &Window, app: &SharedApp, token: AnimationToken) {
    let step = {
        let app = Rc::clone(app);
        let window = window.clone();
        Closure::once_into_js(move |now: f64| {
            let more = {
                let Ok(mut guard) = app.try_borrow_mut() else {
                    return;
                };
                let App { controller, page } = &mut *guard;
                controller.on_animation_frame(page, token, now)
            };
            if more {
                request_animation_step(&window, &app, token);
            }
        })
    };
    if window.request_animation_frame(step.unchecked_ref()).is_err() {
        awarn!(
            generation = token.generation(),
            "web: requestAnimationFrame failed, animation dropped"
        );
    }
}
