//! Benchmark-only crate. All content lives in `benches/`.
