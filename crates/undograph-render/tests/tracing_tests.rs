#![forbid(unsafe_code)]

//! Tracing integration tests.
//!
//! Span capture:
//!   cargo test -p undograph-render --features tracing --test tracing_tests
//!
//! Zero-overhead verification (no feature):
//!   cargo test -p undograph-render --test tracing_tests -- zero_overhead

use std::sync::{Arc, Mutex};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use undograph_core::{RawRecord, ingest, layout};
use undograph_render::{GraphStyle, render};

// ============================================================================
// Test Infrastructure
// ============================================================================

/// A tracing Layer that records the names of spans as they are created.
struct SpanNames {
    names: Arc<Mutex<Vec<String>>>,
}

impl<S> tracing_subscriber::Layer<S> for SpanNames
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        self.names
            .lock()
            .unwrap()
            .push(attrs.metadata().name().to_string());
    }
}

fn capture<F: FnOnce()>(f: F) -> Vec<String> {
    let names = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(SpanNames {
        names: names.clone(),
    });
    tracing::subscriber::with_default(subscriber, f);
    let captured = names.lock().unwrap().clone();
    captured
}

fn run_pipeline() {
    let mut tree = ingest(&[
        RawRecord::new(1, 0),
        RawRecord::new(2, 1),
        RawRecord::new(3, 1).current(),
    ])
    .unwrap();
    layout(&mut tree);
    let out = render(&tree, GraphStyle::Spaced).unwrap();
    assert_eq!(out.lines().len(), 7);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(feature = "tracing")]
#[test]
fn pipeline_emits_one_span_per_stage() {
    let names = capture(run_pipeline);
    assert_eq!(
        names,
        ["undograph.ingest", "undograph.layout", "undograph.render"]
    );
}

#[cfg(not(feature = "tracing"))]
#[test]
fn zero_overhead_without_feature() {
    let names = capture(run_pipeline);
    assert!(names.is_empty(), "unexpected spans: {names:?}");
}
