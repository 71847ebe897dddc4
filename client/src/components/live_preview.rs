//! Sandboxed live preview of one submitted component.
//!
//! ARCHITECTURE
//! ============
//! The record is normalized once when the component is created. A one-shot
//! visibility latch defers compiling and mounting the `srcdoc` frame until
//! the card nears the viewport; after that the frame is never patched.
//! Teardown detaches the lifecycle and disconnects the observer.

use std::sync::Arc;

use leptos::prelude::*;
use preview::sandbox::FRAME_STYLE;
use preview::{ContentRecord, DocumentCache, PreviewConfig, PreviewLifecycle, PreviewSource, SandboxPolicy, ScaleBox};

/// Per-page memo of compiled documents, provided via context.
#[derive(Clone, Copy)]
pub struct PreviewCache(pub StoredValue<DocumentCache>);

impl PreviewCache {
    pub fn new(config: PreviewConfig) -> Self {
        Self(StoredValue::new(DocumentCache::new(config)))
    }
}

fn compile_once(source: &PreviewSource, config: &PreviewConfig, cache: Option<PreviewCache>) -> Arc<str> {
    cache
        .and_then(|PreviewCache(cache)| cache.try_update_value(|c| c.get_or_compile(source)))
        .unwrap_or_else(|| Arc::from(preview::compile(source, config)))
}

/// Scaled, sandboxed preview surface filling its parent.
#[component]
pub fn LivePreview(
    /// Record to render. Read once; later changes to the caller's data do not re-render.
    record: ContentRecord,
    /// Accessible frame title.
    #[prop(into)]
    title: String,
) -> impl IntoView {
    let config = use_context::<PreviewConfig>().unwrap_or_default();
    let cache = use_context::<PreviewCache>();
    let source = record.normalize();
    let branch = source.branch();
    #[cfg(feature = "hydrate")]
    let identifier = record.identifier.clone();

    let container = NodeRef::<leptos::html::Div>::new();
    let visible = RwSignal::new(false);
    let lifecycle = StoredValue::new(PreviewLifecycle::new());

    #[cfg(feature = "hydrate")]
    {
        use crate::util::visibility::{ObserveOptions, VisibilityObserver, observe_once};

        let observer = StoredValue::new_local(None::<VisibilityObserver>);
        let options = ObserveOptions::from_config(&config);
        let identifier = identifier.clone();
        Effect::new(move || {
            let Some(element) = container.get() else {
                return;
            };
            let started = lifecycle.try_update_value(|l| l.observe()).unwrap_or(false);
            if !started {
                return;
            }
            let fire = move || {
                if lifecycle.try_update_value(|l| l.notify(true)).unwrap_or(false) {
                    visible.set(true);
                }
            };
            match observe_once(&element, &options, fire) {
                Some(handle) => observer.set_value(Some(handle)),
                None => {
                    log::debug!("preview {identifier}: mounting without observer");
                    fire();
                }
            }
        });
        on_cleanup(move || {
            lifecycle.try_update_value(PreviewLifecycle::detach);
            observer.try_update_value(|slot| {
                if let Some(handle) = slot.take() {
                    handle.disconnect();
                }
            });
        });
    }

    let wrapper_style = ScaleBox::new(config.scale).wrapper_style();
    let frame = move || {
        let document = compile_once(&source, &config, cache);
        lifecycle.try_update_value(|l| l.mount());
        #[cfg(feature = "hydrate")]
        log::debug!("preview {identifier}: mounted via {}", branch.label());
        view! {
            <div class="live-preview__scale" style=wrapper_style.clone()>
                <iframe
                    class="live-preview__frame"
                    title=title.clone()
                    sandbox=SandboxPolicy::isolated().attribute_value()
                    srcdoc=document.to_string()
                    {leptos::tachys::html::attribute::loading("lazy")}
                    referrerpolicy="no-referrer"
                    style=FRAME_STYLE
                ></iframe>
            </div>
        }
    };

    view! {
        <div class="live-preview" data-branch=branch.label() node_ref=container>
            <Show
                when=move || visible.get()
                fallback=|| view! { <div class="live-preview__placeholder" aria-hidden="true"></div> }
            >
                {frame.clone()}
            </Show>
        </div>
    }
}
