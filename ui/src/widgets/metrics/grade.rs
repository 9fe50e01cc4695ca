//! Traffic-light grading for headline rates.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Ok,
    Warn,
    Bad,
}

impl Grade {
    /// Style class attached to the graded value.
    pub fn css_class(self) -> &'static str {
        match self {
            Grade::Ok => "ok",
            Grade::Warn => "warn",
            Grade::Bad => "bad",
        }
    }

    fn from_thresholds(value: f64, ok_at: f64, warn_at: f64) -> Self {
        if value >= ok_at {
            Grade::Ok
        } else if value >= warn_at {
            Grade::Warn
        } else {
            // NaN lands here too.
            Grade::Bad
        }
    }
}

pub fn grade_precision(precision: f64) -> Grade {
    Grade::from_thresholds(precision, 0.90, 0.60)
}

pub fn grade_recall(recall: f64) -> Grade {
    Grade::from_thresholds(recall, 0.80, 0.50)
}
