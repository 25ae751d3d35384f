use std::cell::Cell;
use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::dom::{self, OnceObserver};
use crate::scroll::ScrollState;

/// `true` from the first time the referenced element crosses into the
/// viewport (shrunk by `root_margin`), and forever after.
#[hook]
pub fn use_in_view(node: NodeRef, root_margin: &'static str) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = match node.cast::<Element>() {
                    Some(element) => {
                        let on_reveal = visible.clone();
                        match OnceObserver::new(&element, root_margin, move || on_reveal.set(true)) {
                            Ok(observer) => Some(observer),
                            Err(e) => {
                                log::warn!("IntersectionObserver unavailable, revealing now: {}", e);
                                visible.set(true);
                                None
                            }
                        }
                    }
                    None => None,
                };
                move || drop(observer)
            },
            node,
        );
    }

    *visible
}

/// Entry latch plus continuous progress for one section. Measured after
/// mount and again on every scroll and resize.
#[hook]
pub fn use_scroll_state(node: NodeRef) -> ScrollState {
    let state = use_state(ScrollState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let node = node.clone();
                let last = Cell::new(ScrollState::default());
                let measure: Rc<dyn Fn()> = Rc::new(move || {
                    let Some(element) = node.cast::<Element>() else {
                        return;
                    };
                    let Ok(viewport_height) = dom::viewport_height() else {
                        return;
                    };
                    let (top, height) = dom::element_bounds(&element);
                    let mut next = last.get();
                    next.update(top, height, viewport_height);
                    if next != last.get() {
                        last.set(next);
                        state.set(next);
                    }
                });

                measure();
                let guards = dom::listen_window(&["scroll", "resize"], measure)
                    .map_err(|e| log::warn!("Section progress will not update: {}", e))
                    .ok();
                move || drop(guards)
            },
            node,
        );
    }

    *state
}
