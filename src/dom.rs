use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window,
};

use crate::error::DomError;
use crate::scroll::RevealLatch;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn scroll_y() -> Result<f64, DomError> {
    Ok(window()?.scroll_y()?)
}

pub fn viewport_height() -> Result<f64, DomError> {
    let height = window()?.inner_height()?;
    height
        .as_f64()
        .ok_or_else(|| DomError::Js("innerHeight is not a number".to_string()))
}

/// Top and height of an element relative to the viewport.
pub fn element_bounds(element: &Element) -> (f64, f64) {
    let rect = element.get_bounding_client_rect();
    (rect.top(), rect.height())
}

/// Viewport-relative top edge of the element with the given id, if present.
pub fn section_top(id: &str) -> Result<Option<f64>, DomError> {
    Ok(document()?
        .get_element_by_id(id)
        .map(|element| element.get_bounding_client_rect().top()))
}

/// Smooth-scrolls to `#id`. Returns `Ok(false)` when the anchor is not in
/// the document; that case is a no-op.
pub fn scroll_to_anchor(href: &str) -> Result<bool, DomError> {
    let id = href.trim_start_matches('#');
    let Some(element) = document()?.get_element_by_id(id) else {
        log::warn!("Scroll target {} does not exist", href);
        return Ok(false);
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(true)
}

pub fn scroll_to_top() -> Result<(), DomError> {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), DomError> {
    let promise = window()?.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await?;
    Ok(())
}

/// Registers one shared handler for several window events. Each returned
/// listener stays attached until it is dropped, so an effect teardown can
/// release them all by dropping the `Vec`.
pub fn listen_window(events: &[&'static str], handler: Rc<dyn Fn()>) -> Result<Vec<EventListener>, DomError> {
    let window = window()?;
    Ok(events
        .iter()
        .copied()
        .map(|event| {
            let handler = handler.clone();
            EventListener::new(&window, event, move |_| handler())
        })
        .collect())
}

/// Watches one element and calls `on_reveal` the first time it intersects
/// the viewport, then stops observing. Dropping it disconnects early.
pub struct OnceObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl OnceObserver {
    pub fn new<F>(element: &Element, root_margin: &str, on_reveal: F) -> Result<Self, DomError>
    where
        F: FnOnce() + 'static,
    {
        let mut latch = RevealLatch::new();
        let mut on_reveal = Some(on_reveal);
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if latch.observe(visible) {
                observer.disconnect();
                if let Some(reveal) = on_reveal.take() {
                    reveal();
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);
        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for OnceObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use std::cell::Cell;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn missing_anchor_is_a_noop() {
        assert!(!scroll_to_anchor("#does-not-exist").expect("document available"));
    }

    #[wasm_bindgen_test]
    fn existing_anchor_scrolls() {
        let document = document().expect("document available");
        let section = document.create_element("section").expect("create section");
        section.set_id("rules");
        document
            .body()
            .expect("body available")
            .append_child(&section)
            .expect("append section");

        assert!(scroll_to_anchor("#rules").expect("document available"));
        section.remove();
    }

    #[wasm_bindgen_test]
    fn dropping_listeners_detaches_them() {
        let hits = Rc::new(Cell::new(0));
        let window = window().expect("window available");

        let listeners = {
            let hits = hits.clone();
            listen_window(&["site-ping-a", "site-ping-b"], Rc::new(move || hits.set(hits.get() + 1)))
                .expect("listeners registered")
        };
        assert_eq!(listeners.len(), 2);
        for name in ["site-ping-a", "site-ping-b"] {
            let event = Event::new(name).expect("event created");
            window.dispatch_event(&event).expect("dispatched");
        }
        assert_eq!(hits.get(), 2);

        drop(listeners);
        let event = Event::new("site-ping-a").expect("event created");
        window.dispatch_event(&event).expect("dispatched");
        assert_eq!(hits.get(), 2);
    }

    #[wasm_bindgen_test]
    async fn observer_reveals_visible_element_once() {
        let document = document().expect("document available");
        let marker = document.create_element("div").expect("create div");
        marker
            .set_attribute("style", "position: fixed; top: 0; left: 0; width: 20px; height: 20px;")
            .expect("style set");
        document
            .body()
            .expect("body available")
            .append_child(&marker)
            .expect("append div");

        let reveals = Rc::new(Cell::new(0));
        let observer = {
            let reveals = reveals.clone();
            OnceObserver::new(&marker, "0px", move || reveals.set(reveals.get() + 1))
                .expect("observer created")
        };

        TimeoutFuture::new(200).await;
        assert_eq!(reveals.get(), 1);

        // Leaving and re-entering the viewport does not fire again.
        marker
            .set_attribute("style", "position: fixed; top: -500px; left: 0; width: 20px; height: 20px;")
            .expect("style set");
        TimeoutFuture::new(100).await;
        marker
            .set_attribute("style", "position: fixed; top: 0; left: 0; width: 20px; height: 20px;")
            .expect("style set");
        TimeoutFuture::new(100).await;
        assert_eq!(reveals.get(), 1);

        drop(observer);
        marker.remove();
    }
}
