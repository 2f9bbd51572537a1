use crate::resource::Resource;
use crate::ui::login::intent::LoginIntent;
use crate::ui::login::state::LoginState;
use crate::ui::mvi::Reducer;

/// Shown when the server accepted the request but returned no token.
pub const LOGIN_UNKNOWN_ERROR: &str = "Unknown error";

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginState;
    type Intent = LoginIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginIntent::Submit => LoginState {
                is_loading: true,
                error: String::new(),
                ..state
            },
            LoginIntent::Completed(Resource::Loading) => LoginState {
                is_loading: true,
                ..state
            },
            LoginIntent::Completed(Resource::Success(response)) => {
                match response.token.filter(|t| !t.is_empty()) {
                    Some(token) => LoginState {
                        is_loading: false,
                        token: Some(token),
                        error: String::new(),
                    },
                    // 200 with `{"error": ...}` or an empty object
                    None => LoginState {
                        is_loading: false,
                        error: response
                            .error
                            .filter(|e| !e.trim().is_empty())
                            .unwrap_or_else(|| LOGIN_UNKNOWN_ERROR.to_string()),
                        ..state
                    },
                }
            }
            LoginIntent::Completed(Resource::Error(message)) => LoginState {
                is_loading: false,
                error: message,
                ..state
            },
        }
    }
}
