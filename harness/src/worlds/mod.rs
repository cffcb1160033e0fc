//! Problem-oracle world implementations for tests and benches.

pub mod target_range;
