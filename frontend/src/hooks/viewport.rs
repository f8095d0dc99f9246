use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InViewOptions {
    /// Stop observing after the first intersection.
    pub once: bool,
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for InViewOptions {
    fn default() -> Self {
        InViewOptions {
            once: true,
            threshold: config::REVEAL_THRESHOLD,
            root_margin: config::REVEAL_ROOT_MARGIN,
        }
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Reports whether the element behind `node` intersects the viewport.
///
/// With `once` set the observer disconnects on the first intersection, so the
/// returned flag stays true for the rest of the component's life.
#[hook]
pub fn use_in_view(node: NodeRef, options: InViewOptions) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |(node, options): &(NodeRef, InViewOptions)| {
                let options = *options;
                let observed = node.cast::<Element>().and_then(|element| {
                    let setter = in_view.setter();
                    let callback: ObserverCallback = Closure::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            let intersecting = entries
                                .iter()
                                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                                .any(|entry| entry.is_intersecting());
                            if intersecting && options.once {
                                observer.disconnect();
                            }
                            if intersecting || !options.once {
                                setter.set(intersecting);
                            }
                        },
                    );

                    let init = IntersectionObserverInit::new();
                    init.set_threshold(&JsValue::from_f64(options.threshold));
                    init.set_root_margin(options.root_margin);

                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                        Ok(observer) => {
                            observer.observe(&element);
                            Some((observer, callback))
                        }
                        Err(err) => {
                            warn!("IntersectionObserver unavailable, showing content: {:?}", err);
                            in_view.set(true);
                            None
                        }
                    }
                });

                move || {
                    if let Some((observer, _callback)) = observed {
                        observer.disconnect();
                    }
                }
            },
            (node, options),
        );
    }

    *in_view
}
