use super::*;
use crate::source::LegacySlots;

fn tailwind(markup: &str) -> PreviewSource {
    PreviewSource::Tailwind { markup: markup.to_owned() }
}

#[test]
fn hit_returns_the_same_document() {
    let mut cache = DocumentCache::new(PreviewConfig::default());
    let first = cache.get_or_compile(&tailwind("<p>a</p>"));
    let second = cache.get_or_compile(&tailwind("<p>a</p>"));
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);
}

#[test]
fn cached_output_matches_fresh_compile() {
    let mut cache = DocumentCache::new(PreviewConfig::default());
    let source = PreviewSource::Legacy(LegacySlots { body: "<p>x</p>".to_owned(), ..LegacySlots::default() });
    let cached = cache.get_or_compile(&source);
    assert_eq!(&*cached, compile(&source, cache.config()).as_str());
}

#[test]
fn full_cache_is_cleared_before_insert() {
    let mut cache = DocumentCache::with_max_entries(PreviewConfig::default(), 2);
    cache.get_or_compile(&tailwind("a"));
    cache.get_or_compile(&tailwind("b"));
    assert_eq!(cache.len(), 2);
    cache.get_or_compile(&tailwind("c"));
    assert_eq!(cache.len(), 1);
}

#[test]
fn zero_capacity_is_clamped_to_one() {
    let mut cache = DocumentCache::with_max_entries(PreviewConfig::default(), 0);
    assert!(cache.is_empty());
    cache.get_or_compile(&tailwind("a"));
    assert_eq!(cache.len(), 1);
}
