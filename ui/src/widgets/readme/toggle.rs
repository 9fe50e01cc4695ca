//! Show/hide state for the README panel.
//!
//! Each panel owns one `DocumentToggle`. The document is fetched on the first
//! transition to `Shown`; later toggles reuse what was rendered. A failed load
//! leaves `loaded` unset so the next open retries.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Hide,
    /// Show what is already there (or the load still in flight).
    Show,
    /// Show and start the one fetch for this panel.
    ShowAndFetch,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentToggle {
    visibility: Visibility,
    loaded: bool,
    in_flight: bool,
}

impl DocumentToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) -> ToggleAction {
        match self.visibility {
            Visibility::Shown => {
                self.visibility = Visibility::Hidden;
                ToggleAction::Hide
            }
            Visibility::Hidden => {
                self.visibility = Visibility::Shown;
                if self.loaded || self.in_flight {
                    ToggleAction::Show
                } else {
                    self.in_flight = true;
                    ToggleAction::ShowAndFetch
                }
            }
        }
    }

    pub fn finish_load(&mut self, success: bool) {
        self.in_flight = false;
        self.loaded = self.loaded || success;
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_expanded(&self) -> bool {
        self.visibility == Visibility::Shown
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }
}
