mod extract;
pub use extract::{extract, Excerpt, SnippetSet};

mod view;
pub use view::SnippetsPanel;
