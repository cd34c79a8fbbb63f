use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that gains the `animate` class the first time 10% of it enters
/// the viewport, then stops observing. One-shot per element.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let mut observer_handle: Option<IntersectionObserver> = None;
                let mut callback_handle = None;

                if let Some(element) = node.cast::<Element>() {
                    let callback = Closure::wrap(Box::new(
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                                    if entry.is_intersecting() {
                                        let target = entry.target();
                                        let _ = target.class_list().add_1("animate");
                                        observer.unobserve(&target);
                                    }
                                }
                            }
                        },
                    )
                        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(0.1));
                    if let Ok(observer) = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        observer.observe(&element);
                        observer_handle = Some(observer);
                        callback_handle = Some(callback);
                    }
                }

                move || {
                    if let Some(observer) = observer_handle {
                        observer.disconnect();
                    }
                    drop(callback_handle);
                }
            },
            (),
        );
    }

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
