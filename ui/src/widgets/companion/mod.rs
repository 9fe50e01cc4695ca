mod probe;
pub use probe::{probe_assets, AssetPresence, CtaState};

mod view;
pub use view::CompanionCta;
