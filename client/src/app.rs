//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use preview::PreviewConfig;

use crate::net::api::ListingSource;
use crate::pages::showcase::ShowcasePage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the preview configuration and sets up client-side routing. SSR
/// and hydration must see the same config, so the default is used unless a
/// caller passes one explicitly. A config that fails validation is replaced
/// by the default.
#[component]
pub fn App(#[prop(optional)] config: Option<PreviewConfig>) -> impl IntoView {
    provide_meta_context();
    provide_context(checked_config(config));

    view! {
        <Stylesheet id="leptos" href="/pkg/snippet-market.css"/>
        <Title text="Snippet Market"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <ShowcasePage listing=ListingSource::Showcase/> }/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("queue"))
                    view=|| view! { <ShowcasePage listing=ListingSource::AdminQueue/> }
                />
                <Route
                    path=(StaticSegment("me"), StaticSegment("components"))
                    view=|| view! { <ShowcasePage listing=ListingSource::Mine/> }
                />
            </Routes>
        </Router>
    }
}

fn checked_config(config: Option<PreviewConfig>) -> PreviewConfig {
    match config.map(|c| c.validate().map(|()| c)) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            leptos::logging::warn!("invalid preview config, using defaults: {e}");
            PreviewConfig::default()
        }
        None => PreviewConfig::default(),
    }
}
