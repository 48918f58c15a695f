// ============================================================
// SAMPLING INFRASTRUCTURE LAYER
// ============================================================
// Bounded, encoding-aware line sampling from byte streams

mod bounded_sampler;

pub use bounded_sampler::{encoding_for_label, extract_sample_lines, BoundedSampler};
