//! Prometheus text exposition encoding.
//!
//! Stateless transform over a registry: for each metric a `# HELP` line, a
//! `# TYPE` line, then its sample lines, in registration order. Histograms
//! are read through `snapshot()` so concurrent observations never produce a
//! torn series.
//!
//! Numeric formatting relies on `Display`: integers carry no decimal point,
//! floats render in their shortest round-trip form.

use std::fmt::Write;

use crate::metric::{Counter, Histogram};
use crate::registry::{Metric, Registry};

/// Render the current state of every registered metric.
pub fn encode(registry: &Registry) -> String {
    let mut out = String::new();
    for metric in registry.all() {
        match metric {
            Metric::Counter(c) => encode_counter(&mut out, c),
            Metric::Histogram(h) => encode_histogram(&mut out, h),
        }
    }
    out
}

fn encode_counter(out: &mut String, counter: &Counter) {
    write_header(out, counter.name(), counter.help(), "counter");
    let _ = writeln!(out, "{} {}", counter.name(), counter.value());
}

fn encode_histogram(out: &mut String, histogram: &Histogram) {
    write_header(out, histogram.name(), histogram.help(), "histogram");

    let name = histogram.name();
    let snap = histogram.snapshot();
    for (bound, cumulative) in &snap.buckets {
        let _ = writeln!(out, "{name}_bucket{{le=\"{bound}\"}} {cumulative}");
    }
    // The +Inf bucket covers every observation, including values above the
    // largest finite bound.
    let _ = writeln!(out, "{name}_bucket{{le=\"+Inf\"}} {}", snap.count);
    let _ = writeln!(out, "{name}_sum {}", snap.sum);
    let _ = writeln!(out, "{name}_count {}", snap.count);
}

fn write_header(out: &mut String, name: &str, help: &str, metric_type: &str) {
    let _ = writeln!(out, "# HELP {} {}", name, escape_help(help));
    let _ = writeln!(out, "# TYPE {} {}", name, metric_type);
}

/// Escape backslashes and newlines so help text stays on its HELP line.
fn escape_help(help: &str) -> String {
    help.replace('\\', "\\\\").replace('\n', "\\n")
}
