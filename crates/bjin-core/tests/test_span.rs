//! Tests for source code span tracking.

use bjin_core::span::{Location, Span};

#[test]
fn test_span_from_range() {
    let span = Span::from_range(4, 10);
    assert_eq!(span.start.offset, 4);
    assert_eq!(span.end.offset, 10);
}

#[test]
fn test_default_span_points_at_start() {
    let span = Span::default();
    assert_eq!(span.start, Location::new(0, 0));
    assert_eq!(span.end, span.start);
}

#[test]
fn test_span_converts_to_source_span() {
    let source: miette::SourceSpan = Span::from_range(3, 8).into();
    assert_eq!(source.offset(), 3);
    assert_eq!(source.len(), 5);
}

#[test]
fn test_span_display() {
    let span = Span::new(Location::new(1, 2), Location::new(1, 9));
    assert_eq!(span.to_string(), "1:2-1:9");
}
