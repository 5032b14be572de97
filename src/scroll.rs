use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config::{HEADER_SCROLL_THRESHOLD, TO_TOP_THRESHOLD};

/// Visual state derived from the vertical scroll offset. Both flags use
/// strict comparisons with no smoothing, so they can flicker when the
/// offset jitters around a threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub header_scrolled: bool,
    pub to_top_visible: bool,
}

impl ScrollState {
    pub fn at(y: f64) -> Self {
        Self {
            header_scrolled: y > HEADER_SCROLL_THRESHOLD,
            to_top_visible: y > TO_TOP_THRESHOLD,
        }
    }
}

/// Tracks `window.scrollY` and re-renders only when a threshold is crossed.
#[hook]
pub fn use_scroll_state() -> ScrollState {
    let state = use_state_eq(ScrollState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let window = window();
                let listener = window.clone().map(|window| {
                    let scroll_window = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let y = scroll_window.scroll_y().unwrap_or(0.0);
                        state.set(ScrollState::at(y));
                    }) as Box<dyn FnMut()>);
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    scroll_callback
                });

                move || {
                    if let (Some(window), Some(scroll_callback)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    *state
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let mut options = ScrollToOptions::new();
        options.top(0.0).behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollToTopProps {
    pub visible: bool,
}

#[function_component(ScrollToTop)]
pub fn scroll_to_top_button(props: &ScrollToTopProps) -> Html {
    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <button
            id="toTop"
            class={classes!("to-top", props.visible.then(|| "is-visible"))}
            aria-label="Scroll to top"
            {onclick}
        >
            {"↑"}
        </button>
    }
}
