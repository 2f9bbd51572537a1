use crate::ui::mvi::Reducer;
use crate::ui::profile::intent::ProfileIntent;
use crate::ui::profile::reducer::ProfileReducer;
use crate::ui::profile::state::ProfileState;
use crate::usecase::{GetProfileUseCase, UpdateProfileUseCase};

pub const PROFILE_UPDATED_MESSAGE: &str = "Profile Updated!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileEvent {
    ShowMessage(String),
}

/// Profile screen state for one session token.
///
/// Without a token every operation is a no-op and returns `None`.
pub struct ProfileViewModel {
    get_profile: GetProfileUseCase,
    update_profile: UpdateProfileUseCase,
    token: Option<String>,
    state: ProfileState,
}

impl ProfileViewModel {
    pub fn new(
        get_profile: GetProfileUseCase,
        update_profile: UpdateProfileUseCase,
        token: Option<String>,
    ) -> Self {
        Self {
            get_profile,
            update_profile,
            token,
            state: ProfileState::default(),
        }
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn dispatch(&mut self, intent: ProfileIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = ProfileReducer::reduce(state, intent);
    }

    /// Fetch the profile. Emits a message only on failure.
    pub async fn refresh(&mut self) -> Option<ProfileEvent> {
        let token = self.token.clone()?;

        self.dispatch(ProfileIntent::Requested);
        let result = self.get_profile.execute(&token).await;
        self.dispatch(ProfileIntent::Loaded(result));

        self.failure_event()
    }

    /// Rename the profile. The name is sent as typed; a blank one is sent as
    /// "no change".
    pub async fn update_name(&mut self, name: &str) -> Option<ProfileEvent> {
        let token = self.token.clone()?;
        let name = Some(name).filter(|n| !n.trim().is_empty());

        self.dispatch(ProfileIntent::Requested);
        let result = self.update_profile.execute(&token, name).await;
        self.dispatch(ProfileIntent::Loaded(result));

        Some(
            self.failure_event()
                .unwrap_or_else(|| ProfileEvent::ShowMessage(PROFILE_UPDATED_MESSAGE.to_string())),
        )
    }

    fn failure_event(&self) -> Option<ProfileEvent> {
        if self.state.has_error() {
            tracing::info!(error = %self.state.error, "profile request failed");
            Some(ProfileEvent::ShowMessage(self.state.error.clone()))
        } else {
            None
        }
    }
}
