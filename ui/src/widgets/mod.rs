pub mod companion;
pub mod metrics;
pub mod readme;
pub mod snippets;
