//! Scroll-triggered reveal of sections, cards and timeline items
//!
//! After hydration every element matching a [`RevealKind`] selector is
//! registered with a shared [`RevealTracker`](crate::core::RevealTracker) and
//! given its hidden style. One IntersectionObserver per kind reports
//! visibility; the tracker decides the stagger delay and the target style.

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

/// Attach scroll reveal observers once the page is mounted
pub fn use_scroll_reveal() {
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| {
            if let Err(e) = observer::attach_all() {
                leptos::logging::warn!("Scroll reveal disabled: {:?}", e);
            }
        });
    }
}

#[cfg(feature = "hydrate")]
mod observer {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{
        HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    };

    use crate::core::reveal::{REVEAL_ID_ATTRIBUTE, ROOT_MARGIN, VISIBILITY_THRESHOLD};
    use crate::core::{RevealKind, RevealStyle, RevealTracker};

    type SharedTracker = Rc<RefCell<RevealTracker>>;

    fn apply_style(element: &HtmlElement, style: &RevealStyle) -> Result<(), JsValue> {
        let css = element.style();
        css.set_property("opacity", style.opacity)?;
        css.set_property("transform", style.transform)?;
        css.set_property("transition", style.transition)?;
        Ok(())
    }

    pub fn attach_all() -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("No document"))?;
        let tracker: SharedTracker = Rc::new(RefCell::new(RevealTracker::new()));

        for kind in RevealKind::ALL {
            let nodes = document.query_selector_all(kind.selector())?;
            let observer = create_observer(tracker.clone())?;

            for index in 0..nodes.length() {
                let Some(element) = nodes
                    .item(index)
                    .and_then(|node| node.dyn_into::<HtmlElement>().ok())
                else {
                    continue;
                };

                let id = kind.element_id(index as usize);
                element.set_attribute(REVEAL_ID_ATTRIBUTE, &id)?;
                let style = tracker.borrow_mut().register(id, kind, index as usize);
                apply_style(&element, &style)?;
                observer.observe(&element);
            }
        }

        Ok(())
    }

    fn create_observer(tracker: SharedTracker) -> Result<IntersectionObserver, JsValue> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for (position, entry) in entries.iter().enumerate() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }

                    let target = entry.target();
                    let Some(id) = target.get_attribute(REVEAL_ID_ATTRIBUTE) else {
                        continue;
                    };

                    let delay = {
                        let mut tracker = tracker.borrow_mut();
                        tracker.mark_visible(&id, js_sys::Date::now());
                        tracker.stagger_delay_ms(&id, position)
                    };
                    let Some(delay) = delay else {
                        continue;
                    };

                    let tracker = tracker.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(delay).await;
                        let style = tracker.borrow().style_for(&id);
                        if let (Some(style), Ok(element)) = (style, target.dyn_into::<HtmlElement>())
                        {
                            let _ = apply_style(&element, &style);
                        }
                    });
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
        options.set_root_margin(ROOT_MARGIN);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        // The observer lives as long as the page
        callback.forget();

        Ok(observer)
    }
}
