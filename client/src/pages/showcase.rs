//! Component grid page shared by the showcase, review queue, and
//! my-components routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches one listing page on mount and appends further pages on demand.
//! The page owns the compiled-document cache so it is dropped with the page.

use leptos::prelude::*;
use preview::PreviewConfig;

use crate::components::component_card::ComponentCard;
use crate::components::live_preview::PreviewCache;
use crate::net::api::ListingSource;
use crate::state::showcase::ShowcaseState;

#[component]
pub fn ShowcasePage(listing: ListingSource) -> impl IntoView {
    let config = use_context::<PreviewConfig>().unwrap_or_default();
    provide_context(PreviewCache::new(config));

    let state = RwSignal::new(ShowcaseState::default());
    load_page(listing, state, 1);

    let on_more = move |_| {
        let next = state.get_untracked().next_page();
        load_page(listing, state, next);
    };
    let show_status = listing != ListingSource::Showcase;

    view! {
        <div class="showcase-page">
            <header class="showcase-page__header">
                <h1 class="showcase-page__title">{listing.heading()}</h1>
            </header>

            <Show when=move || state.get().error.is_some()>
                <p class="showcase-page__error">{move || state.get().error.unwrap_or_default()}</p>
            </Show>

            <div class="showcase-page__grid">
                <For
                    each=move || state.get().items
                    key=|item| item.id.clone()
                    children=move |item| view! { <ComponentCard item=item show_status=show_status/> }
                />
            </div>

            <Show
                when=move || state.get().loading
                fallback=move || {
                    view! {
                        <Show when=move || !state.get().exhausted && !state.get().items.is_empty()>
                            <button class="btn showcase-page__more" on:click=on_more>
                                "Load more"
                            </button>
                        </Show>
                    }
                }
            >
                <p class="showcase-page__loading">"Loading components..."</p>
            </Show>

            <Show when=move || !state.get().loading && state.get().error.is_none() && state.get().items.is_empty()>
                <p class="showcase-page__empty">"No components yet."</p>
            </Show>
        </div>
    }
}

fn load_page(listing: ListingSource, state: RwSignal<ShowcaseState>, page: u32) {
    state.update(|s| s.begin_fetch(page));
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_components(listing, page).await;
            if let Err(e) = &result {
                leptos::logging::warn!("listing fetch failed: {e}");
            }
            state.try_update(|s| s.apply_fetch(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = listing;
    }
}
