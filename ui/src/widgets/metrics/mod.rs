mod grade;
pub use grade::{grade_precision, grade_recall, Grade};

mod record;
pub use record::{MetricsDisplay, MetricsRecord};

mod view;
pub use view::MetricsPanel;
