use crate::ui::login::intent::LoginIntent;
use crate::ui::login::reducer::LoginReducer;
use crate::ui::login::state::LoginState;
use crate::ui::mvi::Reducer;
use crate::usecase::LoginUseCase;

/// One-shot outcome of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEvent {
    NavigateToDashboard { token: String },
    ShowMessage(String),
}

pub struct LoginViewModel {
    use_case: LoginUseCase,
    state: LoginState,
}

impl LoginViewModel {
    pub fn new(use_case: LoginUseCase) -> Self {
        Self {
            use_case,
            state: LoginState::default(),
        }
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: LoginIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = LoginReducer::reduce(state, intent);
    }

    pub async fn login(&mut self, email: &str, password: &str) -> LoginEvent {
        self.dispatch(LoginIntent::Submit);
        let result = self.use_case.execute(email, password).await;
        self.dispatch(LoginIntent::Completed(result));

        match (&self.state.token, self.state.has_error()) {
            (Some(token), false) => {
                tracing::info!("login succeeded");
                LoginEvent::NavigateToDashboard {
                    token: token.clone(),
                }
            }
            _ => {
                tracing::info!(error = %self.state.error, "login failed");
                LoginEvent::ShowMessage(self.state.error.clone())
            }
        }
    }
}
