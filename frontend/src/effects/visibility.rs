use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// One-shot visibility latch. Returns `false` until the node first
/// intersects the viewport (shrunk by `margin`), then `true` forever; the
/// observer disconnects itself after the first hit.
#[hook]
pub fn use_in_view(node: NodeRef, margin: &'static str) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node| {
                let mut subscription: Option<(
                    IntersectionObserver,
                    Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
                )> = None;

                if let Some(element) = node.cast::<Element>() {
                    let callback = Closure::wrap(Box::new(
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if entry.is_intersecting() {
                                    in_view.set(true);
                                    observer.disconnect();
                                }
                            }
                        },
                    )
                        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                    let options = IntersectionObserverInit::new();
                    options.set_root_margin(margin);

                    if let Ok(observer) = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        observer.observe(&element);
                        subscription = Some((observer, callback));
                    }
                }

                move || {
                    if let Some((observer, _callback)) = subscription {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *in_view
}
