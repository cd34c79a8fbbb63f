use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::scroll;

/// Floating button that appears past the 500 px offset and smooth-scrolls
/// the page back to the top.
#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let callback = Closure::wrap(Box::new(move || {
                    if let Some(win) = web_sys::window() {
                        if let Ok(scroll_y) = win.scroll_y() {
                            visible.set(scroll::back_to_top_visible(scroll_y));
                        }
                    }
                }) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                move || {
                    if let Some(win) = web_sys::window() {
                        let _ = win.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(window) = web_sys::window() {
            let opts = ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    });

    html! {
        <button
            class={classes!("back-to-top", (*visible).then(|| "active"))}
            aria-label="Back to top"
            {onclick}
        >
            {"\u{2191}"}
        </button>
    }
}
