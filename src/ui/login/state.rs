use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginState {
    pub is_loading: bool,
    /// Session token from the last successful login.
    pub token: Option<String>,
    /// Empty when there is nothing to report.
    pub error: String,
}

impl UiState for LoginState {}

impl LoginState {
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}
