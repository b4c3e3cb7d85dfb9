//! Performance benchmarks for the validation-message triage pipeline
//!
//! The handler runs on the driver's reporting path, so these benchmarks
//! watch the per-event cost of the three paths that matter: deny-listed,
//! freshly counted, and past the spam threshold.

use ash::vk;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use vktriage::{DiagnosticEvent, LogSink, NullDebugHost, TriageOptions, ValidationTriage};

/// Sink that throws routed lines away; the benchmarks measure the
/// pipeline, not the logger.
struct DiscardSink;

impl LogSink for DiscardSink {
    fn error(&self, _target: &str, _line: &str) {}

    fn warning(&self, _target: &str, _line: &str) {}
}

fn quiet_triage() -> ValidationTriage {
    ValidationTriage::new(TriageOptions::default())
        .with_sink(DiscardSink)
        .with_host(NullDebugHost)
}

fn error_event(id: i32) -> DiagnosticEvent<'static> {
    DiagnosticEvent::new(
        vk::DebugUtilsMessageSeverityFlagsEXT::ERROR,
        vk::DebugUtilsMessageTypeFlagsEXT::VALIDATION,
        id,
        "vkCmdDrawIndexed: descriptor set 0 not bound",
    )
}

/// Benchmark the interesting handler paths
fn bench_handle_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("triage_handle");

    // Suppression is the hottest path in spammy scenes; it must stay
    // allocation-free.
    group.bench_function("denied_id", |b| {
        let triage = quiet_triage();
        let event = error_event(101294395);
        b.iter(|| black_box(triage.handle(&event)));
    });

    group.bench_function("first_occurrence", |b| {
        let event = error_event(77);
        b.iter_batched(
            quiet_triage,
            |triage| black_box(triage.handle(&event)),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("past_spam_threshold", |b| {
        let event = error_event(77);
        let triage = quiet_triage();
        for _ in 0..20 {
            triage.handle(&event);
        }
        b.iter(|| black_box(triage.handle(&event)));
    });

    group.finish();
}

/// Benchmark line formatting on its own
fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_formatting");

    group.bench_function("display_line", |b| {
        let event = error_event(4242);
        b.iter(|| black_box(event.to_string()));
    });

    group.finish();
}

criterion_group!(benches, bench_handle_paths, bench_formatting);
criterion_main!(benches);
