use crate::api::ProfileData;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileState {
    pub is_loading: bool,
    /// Last profile the server returned.
    pub profile: Option<ProfileData>,
    pub error: String,
}

impl UiState for ProfileState {}

impl ProfileState {
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}
