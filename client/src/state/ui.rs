#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Page-level UI state: the inline error banner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Banner text; empty hides the banner.
    pub error: String,
}

impl UiState {
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = message.into();
    }

    pub fn clear_error(&mut self) {
        self.error.clear();
    }
}
