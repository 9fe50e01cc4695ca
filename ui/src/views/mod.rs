mod home;
pub use home::Home;

mod metrics;
pub use metrics::Metrics;
