use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::scroll;

/// In-page sections the nav links to, in display order.
const SECTIONS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("services", "Services"),
    ("testimonials", "Testimonials"),
    ("contact", "Contact"),
];

/// Smooth-scrolls so `fragment`'s top lands just below the header. Missing
/// targets are a no-op.
fn scroll_to_anchor(fragment: &str, header: Option<HtmlElement>) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let document = match window.document() {
        Some(d) => d,
        None => return,
    };
    if let Some(target) = document.get_element_by_id(fragment) {
        let header_height = header.map(|h| h.offset_height() as f64).unwrap_or(0.0);
        let top = target.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0)
            - header_height;
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_sticky = use_state(|| false);

    let header_ref = use_node_ref();
    let menu_btn_ref = use_node_ref();
    let menu_close_ref = use_node_ref();

    // Sticky flag follows the raw scroll offset, recomputed on every event.
    {
        let is_sticky = is_sticky.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let callback = Closure::wrap(Box::new(move || {
                    if let Some(win) = web_sys::window() {
                        if let Ok(scroll_y) = win.scroll_y() {
                            is_sticky.set(scroll::header_sticky(scroll_y));
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

    // Body scroll lock and focus handoff run after the panel has rendered
    // in its new state.
    {
        let menu_close_ref = menu_close_ref.clone();
        use_effect_with_deps(
            move |open| {
                if let Some(body) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.body())
                {
                    if *open {
                        let _ = body.class_list().add_1("no-scroll");
                    } else {
                        let _ = body.class_list().remove_1("no-scroll");
                    }
                }
                if *open {
                    if let Some(close_btn) = menu_close_ref.cast::<HtmlElement>() {
                        let _ = close_btn.focus();
                    }
                }
                || ()
            },
            *menu_open,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let anchor_click = |fragment: &'static str, close: bool| {
        let menu_open = menu_open.clone();
        let menu_btn_ref = menu_btn_ref.clone();
        let header_ref = header_ref.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if close {
                menu_open.set(false);
                if let Some(btn) = menu_btn_ref.cast::<HtmlElement>() {
                    let _ = btn.focus();
                }
            }
            scroll_to_anchor(fragment, header_ref.cast::<HtmlElement>());
        })
    };

    let panel_class = if *menu_open {
        "mobile-menu active"
    } else {
        "mobile-menu"
    };
    let overlay_class = if *menu_open {
        "overlay active"
    } else {
        "overlay"
    };

    html! {
        <>
            <header
                ref={header_ref.clone()}
                class={classes!("site-header", (*is_sticky).then(|| "sticky"))}
            >
                <div class="header-inner">
                    <a class="logo" href="#home" onclick={anchor_click("home", false)}>
                        {"Badr Studio"}
                    </a>
                    <nav class="nav-links">
                        <ul>
                            { for SECTIONS.iter().map(|&(id, label)| html! {
                                <li>
                                    <a href={format!("#{}", id)} onclick={anchor_click(id, false)}>
                                        {label}
                                    </a>
                                </li>
                            }) }
                        </ul>
                    </nav>
                    <button
                        ref={menu_btn_ref.clone()}
                        class="burger-menu"
                        aria-expanded={if *menu_open { "true" } else { "false" }}
                        aria-label="Open menu"
                        onclick={toggle_menu.clone()}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </header>
            <div class={panel_class}>
                <button
                    ref={menu_close_ref.clone()}
                    class="menu-close"
                    aria-label="Close menu"
                    onclick={toggle_menu.clone()}
                >
                    {"\u{2715}"}
                </button>
                <ul class="mobile-nav">
                    { for SECTIONS.iter().map(|&(id, label)| html! {
                        <li>
                            <a href={format!("#{}", id)} onclick={anchor_click(id, true)}>
                                {label}
                            </a>
                        </li>
                    }) }
                </ul>
            </div>
            <div class={overlay_class} onclick={close_menu}></div>
        </>
    }
}
