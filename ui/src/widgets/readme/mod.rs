mod toggle;
pub use toggle::{DocumentToggle, ToggleAction, Visibility};

mod view;
pub use view::ReadmePanel;
