//! Grid card for one marketplace component.
//!
//! DESIGN
//! ======
//! Keeps card presentation consistent between the showcase, review queue,
//! and my-components grids. The preview region has a fixed footprint; the
//! frame inside scales itself to fit. The link over the preview is an empty
//! sibling anchor stretched across the region, so the frame never sits
//! inside an `<a>`.

#[cfg(test)]
#[path = "component_card_test.rs"]
mod component_card_test;

use leptos::prelude::*;

use crate::components::live_preview::LivePreview;
use crate::net::types::{ComponentItem, ReviewStatus};

/// A card with title, technology badge, optional status, and live preview.
#[component]
pub fn ComponentCard(
    item: ComponentItem,
    #[prop(optional)] show_status: bool,
) -> impl IntoView {
    let href = format!("/components/{}", item.id);
    let title = item.display_title().to_owned();
    let technology = item.technology.clone().unwrap_or_else(|| "html".to_owned()).to_ascii_lowercase();
    let author = item.author.clone();
    let status = item.status;
    let record = item.content_record();
    let open_label = format!("Open {title}");

    view! {
        <article class="component-card">
            <div class="component-card__preview">
                <LivePreview record=record title=title.clone()/>
                <a class="component-card__overlay" href=href.clone() aria-label=open_label></a>
            </div>
            <div class="component-card__meta">
                <a class="component-card__title" href=href>{title}</a>
                <span class="component-card__badge">{technology}</span>
                {author.map(|name| view! { <span class="component-card__author">{name}</span> })}
                <Show when=move || show_status>
                    <span
                        class="component-card__status"
                        class:component-card__status--pending=move || status == ReviewStatus::Pending
                        class:component-card__status--rejected=move || status == ReviewStatus::Rejected
                    >
                        {status.label()}
                    </span>
                </Show>
            </div>
        </article>
    }
}
