//! Explicit wiring of client, repositories, use cases and screens.

use std::sync::Arc;

use crate::api::{ApiClient, ProfileData};
use crate::repository::{
    AuthRepository, ProfileRepository, RemoteAuthRepository, RemoteProfileRepository,
};
use crate::ui::login::{LoginEvent, LoginViewModel};
use crate::ui::mvi::Reducer;
use crate::ui::navigation::{NavigationIntent, NavigationReducer, NavigationState, Screen};
use crate::ui::profile::{ProfileEvent, ProfileViewModel};
use crate::usecase::{GetProfileUseCase, LoginUseCase, UpdateProfileUseCase};

/// What a full login → dashboard → profile walk produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    /// Screen the walk ended on.
    pub screen: Screen,
    pub token: Option<String>,
    pub profile: Option<ProfileData>,
    /// Messages a screen would have shown, in order.
    pub messages: Vec<String>,
    /// Set when the walk ended in a failure.
    pub error: Option<String>,
}

pub struct App {
    login: LoginUseCase,
    get_profile: GetProfileUseCase,
    update_profile: UpdateProfileUseCase,
    navigation: NavigationState,
}

impl App {
    pub fn new(api: ApiClient) -> Self {
        Self::with_repositories(
            Arc::new(RemoteAuthRepository::new(api.clone())),
            Arc::new(RemoteProfileRepository::new(api)),
        )
    }

    pub fn with_repositories(
        auth: Arc<dyn AuthRepository>,
        profile: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self {
            login: LoginUseCase::new(auth),
            get_profile: GetProfileUseCase::new(profile.clone()),
            update_profile: UpdateProfileUseCase::new(profile),
            navigation: NavigationState::default(),
        }
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn navigate(&mut self, intent: NavigationIntent) {
        let state = std::mem::take(&mut self.navigation);
        self.navigation = NavigationReducer::reduce(state, intent);
        tracing::debug!(screen = %self.navigation.current(), "navigated");
    }

    pub fn login_view_model(&self) -> LoginViewModel {
        LoginViewModel::new(self.login.clone())
    }

    pub fn profile_view_model(&self, token: Option<String>) -> ProfileViewModel {
        ProfileViewModel::new(self.get_profile.clone(), self.update_profile.clone(), token)
    }

    /// Log in, open the dashboard, open the profile, optionally rename.
    pub async fn run_session(
        &mut self,
        email: &str,
        password: &str,
        new_name: Option<&str>,
    ) -> SessionReport {
        let mut messages = Vec::new();

        let mut login = self.login_view_model();
        let token = match login.login(email, password).await {
            LoginEvent::NavigateToDashboard { token } => token,
            LoginEvent::ShowMessage(message) => {
                messages.push(message.clone());
                return SessionReport {
                    screen: self.navigation.current().clone(),
                    token: None,
                    profile: None,
                    messages,
                    error: Some(message),
                };
            }
        };

        self.navigate(NavigationIntent::Navigate(Screen::Dashboard {
            token: token.clone(),
        }));
        self.navigate(NavigationIntent::Navigate(Screen::Profile {
            token: token.clone(),
        }));

        let screen_token = self.navigation.current().token().map(str::to_string);
        let mut profile = self.profile_view_model(screen_token);

        if let Some(ProfileEvent::ShowMessage(message)) = profile.refresh().await {
            messages.push(message);
        }

        if let Some(name) = new_name {
            if let Some(ProfileEvent::ShowMessage(message)) = profile.update_name(name).await {
                messages.push(message);
            }
        }

        let state = profile.state();
        SessionReport {
            screen: self.navigation.current().clone(),
            token: Some(token),
            profile: state.profile.clone(),
            messages,
            error: state.has_error().then(|| state.error.clone()),
        }
    }
}
