use super::*;

#[test]
fn listing_endpoint_formats_first_page_without_query() {
    assert_eq!(listing_endpoint(API_BASE, ListingSource::Showcase, 1), "/api/components");
    assert_eq!(listing_endpoint(API_BASE, ListingSource::Showcase, 0), "/api/components");
}

#[test]
fn listing_endpoint_adds_page_query() {
    assert_eq!(listing_endpoint(API_BASE, ListingSource::Mine, 3), "/api/components/mine?page=3");
}

#[test]
fn listing_endpoint_trims_trailing_slash() {
    assert_eq!(
        listing_endpoint("https://api.example/", ListingSource::AdminQueue, 1),
        "https://api.example/admin/components/pending"
    );
}

#[test]
fn listing_failed_message_formats_status() {
    assert_eq!(listing_failed_message(503), "component listing failed: 503");
}

#[test]
fn headings_name_each_listing() {
    assert_eq!(ListingSource::Showcase.heading(), "Components");
    assert_eq!(ListingSource::AdminQueue.heading(), "Review Queue");
    assert_eq!(ListingSource::Mine.heading(), "My Components");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_components_is_unavailable_off_browser() {
    let result = block_on_ready(fetch_components(ListingSource::Showcase, 1));
    assert_eq!(result, Err("not available on server".to_owned()));
}

// Minimal executor: the non-hydrate future resolves on first poll.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future did not resolve on first poll"),
    }
}
