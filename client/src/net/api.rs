//! REST API helpers for component listings.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since listings are fetched
//! after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Failures surface as `Result<_, String>` so pages can show an inline
//! message instead of panicking during hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ComponentItem;

/// Base path of the marketplace REST API.
pub const API_BASE: &str = "/api";

/// Which listing a page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListingSource {
    /// Approved components in the public showcase.
    #[default]
    Showcase,
    /// Submissions awaiting moderation.
    AdminQueue,
    /// The signed-in user's own submissions.
    Mine,
}

impl ListingSource {
    pub fn heading(self) -> &'static str {
        match self {
            Self::Showcase => "Components",
            Self::AdminQueue => "Review Queue",
            Self::Mine => "My Components",
        }
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn path(self) -> &'static str {
        match self {
            Self::Showcase => "components",
            Self::AdminQueue => "admin/components/pending",
            Self::Mine => "components/mine",
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn listing_endpoint(base: &str, source: ListingSource, page: u32) -> String {
    let base = base.trim_end_matches('/');
    let path = source.path();
    if page <= 1 { format!("{base}/{path}") } else { format!("{base}/{path}?page={page}") }
}

#[cfg(any(test, feature = "hydrate"))]
fn listing_failed_message(status: u16) -> String {
    format!("component listing failed: {status}")
}

/// Fetch one page of a component listing.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body is not a listing.
pub async fn fetch_components(source: ListingSource, page: u32) -> Result<Vec<ComponentItem>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = listing_endpoint(API_BASE, source, page);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(listing_failed_message(resp.status()));
        }
        let body: super::types::ComponentListResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.into_items())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (source, page);
        Err("not available on server".to_owned())
    }
}
