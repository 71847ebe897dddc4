//! One-shot `IntersectionObserver` glue for preview visibility gating.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LivePreview` attaches one observer per card. The observer reports the
//! first intersecting entry, then disconnects itself; dropping the handle
//! also disconnects, so teardown never leaves a live observer behind.
//!
//! TRADE-OFFS
//! ==========
//! When `IntersectionObserver` cannot be constructed, `observe_once` returns
//! `None` and the caller mounts immediately. SSR paths no-op.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Options handed to the observer.
#[derive(Clone, Debug, PartialEq)]
pub struct ObserveOptions {
    pub root_margin: String,
    pub threshold: f64,
}

impl ObserveOptions {
    pub fn from_config(config: &preview::PreviewConfig) -> Self {
        Self { root_margin: config.root_margin.clone(), threshold: config.threshold.clamp(0.0, 1.0) }
    }
}

/// True when any entry in one observer callback batch is intersecting.
pub fn any_intersecting(entries: impl IntoIterator<Item = bool>) -> bool {
    entries.into_iter().any(|intersecting| intersecting)
}

/// Live observer handle. Disconnects on drop.
#[cfg(feature = "hydrate")]
pub struct VisibilityObserver {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(feature = "hydrate")]
impl VisibilityObserver {
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

#[cfg(feature = "hydrate")]
impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe `element` and call `on_visible` once, on the first intersecting
/// entry. The browser delivers an initial callback right after `observe`, so
/// an element already in view fires without waiting for a scroll.
#[cfg(feature = "hydrate")]
pub fn observe_once(
    element: &web_sys::Element,
    options: &ObserveOptions,
    on_visible: impl FnOnce() + 'static,
) -> Option<VisibilityObserver> {
    let mut pending = Some(on_visible);
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
        let intersecting = entries.iter().map(|entry| {
            entry
                .dyn_into::<web_sys::IntersectionObserverEntry>()
                .is_ok_and(|entry| entry.is_intersecting())
        });
        if !any_intersecting(intersecting) {
            return;
        }
        observer.disconnect();
        if let Some(on_visible) = pending.take() {
            on_visible();
        }
    }) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let init = web_sys::IntersectionObserverInit::new();
    init.set_root_margin(&options.root_margin);
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(options.threshold));

    let observer = match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(err) => {
            leptos::logging::warn!("IntersectionObserver unavailable: {err:?}");
            return None;
        }
    };
    observer.observe(element);
    Some(VisibilityObserver { observer, _callback: callback })
}
