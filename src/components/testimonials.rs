use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::carousel::{card_width_percent, CarouselAction, CarouselState};
use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub items: Vec<Testimonial>,
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Sliding testimonial cards with dot indicators. Auto-advances every
/// 5 s; hovering the slider pauses the timer and leaving re-arms it.
/// Both timer handles live in an Option so arming always replaces the
/// previous one (dropping a gloo timer cancels it).
#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let state = use_reducer({
        let count = props.items.len();
        move || CarouselState::new(count, viewport_width())
    });

    let slide_timer: Rc<RefCell<Option<Interval>>> = use_mut_ref(|| None);
    let resize_debounce: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    // Arm on mount, drop both handles on unmount.
    {
        let slide_timer = slide_timer.clone();
        let resize_debounce = resize_debounce.clone();
        let dispatcher = state.dispatcher();
        let can_navigate = props.items.len() > 1;
        use_effect_with_deps(
            move |_| {
                if can_navigate {
                    let dispatcher = dispatcher.clone();
                    *slide_timer.borrow_mut() =
                        Some(Interval::new(config::SLIDE_INTERVAL_MS, move || {
                            dispatcher.dispatch(CarouselAction::Next);
                        }));
                }
                move || {
                    slide_timer.borrow_mut().take();
                    resize_debounce.borrow_mut().take();
                }
            },
            (),
        );
    }

    // Window resize collapses to one re-render per 100 ms quiet window:
    // each event replaces the pending timeout, so only the trailing edge
    // of a burst fires.
    {
        let dispatcher = state.dispatcher();
        let resize_debounce = resize_debounce.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let callback = Closure::wrap(Box::new(move || {
                    let dispatcher = dispatcher.clone();
                    *resize_debounce.borrow_mut() =
                        Some(Timeout::new(config::RESIZE_THROTTLE_MS, move || {
                            dispatcher.dispatch(CarouselAction::SetCardWidth(
                                card_width_percent(viewport_width()),
                            ));
                        }));
                }) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "resize",
                        callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                move || {
                    if let Some(win) = web_sys::window() {
                        let _ = win.remove_event_listener_with_callback(
                            "resize",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let onmouseenter = {
        let slide_timer = slide_timer.clone();
        Callback::from(move |_: MouseEvent| {
            slide_timer.borrow_mut().take();
        })
    };

    let onmouseleave = {
        let slide_timer = slide_timer.clone();
        let dispatcher = state.dispatcher();
        let can_navigate = props.items.len() > 1;
        Callback::from(move |_: MouseEvent| {
            if !can_navigate {
                return;
            }
            let dispatcher = dispatcher.clone();
            *slide_timer.borrow_mut() =
                Some(Interval::new(config::SLIDE_INTERVAL_MS, move || {
                    dispatcher.dispatch(CarouselAction::Next);
                }));
        })
    };

    let on_prev = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Prev))
    };
    let on_next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Next))
    };

    let track_style = format!(
        "transform: translateX({}%);",
        state.offset_percent()
    );
    let card_style = format!("flex: 0 0 {}%;", state.card_width);
    let controls_disabled = !state.can_navigate();

    html! {
        <div class="testimonials-slider" {onmouseenter} {onmouseleave}>
            <div class="testimonials-viewport">
                <div class="testimonials-track" style={track_style}>
                    { for props.items.iter().map(|t| html! {
                        <div class="testimonial-card" style={card_style.clone()}>
                            <p class="testimonial-quote">{t.quote}</p>
                            <div class="testimonial-author">
                                <strong>{t.author}</strong>
                                <span>{t.role}</span>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
            <button
                class="slider-arrow prev"
                aria-label="Previous testimonial"
                disabled={controls_disabled}
                onclick={on_prev}
            >
                {"\u{2039}"}
            </button>
            <button
                class="slider-arrow next"
                aria-label="Next testimonial"
                disabled={controls_disabled}
                onclick={on_next}
            >
                {"\u{203A}"}
            </button>
            <div class="slider-dots">
                { for (0..props.items.len()).map(|i| {
                    let onclick = {
                        let state = state.clone();
                        Callback::from(move |_: MouseEvent| {
                            state.dispatch(CarouselAction::JumpTo(i));
                        })
                    };
                    html! {
                        <button
                            class={classes!("dot", (i == state.index).then(|| "active"))}
                            aria-label={format!("Show testimonial {}", i + 1)}
                            disabled={controls_disabled}
                            {onclick}
                        />
                    }
                }) }
            </div>
        </div>
    }
}
