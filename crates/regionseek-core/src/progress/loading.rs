use crate::consts::DEFAULT_LOADING_MESSAGE;

/// Busy flag with a message, for short operations that report no percentage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadingState {
    pub loading: bool,
    pub message: String,
}

impl LoadingState {
    pub fn set_loading(&mut self, loading: bool, message: &str) {
        self.loading = loading;
        self.message = message.to_string();
    }

    /// Start with `message`, or the default busy text when `None`.
    pub fn start_loading(&mut self, message: Option<&str>) {
        self.set_loading(true, message.unwrap_or(DEFAULT_LOADING_MESSAGE));
    }

    pub fn stop_loading(&mut self, message: &str) {
        self.set_loading(false, message);
    }
}
