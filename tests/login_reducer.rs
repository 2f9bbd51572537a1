use superlive::api::LoginResponse;
use superlive::resource::Resource;
use superlive::ui::login::{LoginIntent, LoginReducer, LoginState, LOGIN_UNKNOWN_ERROR};
use superlive::ui::mvi::Reducer;

fn completed(token: Option<&str>, error: Option<&str>) -> LoginIntent {
    LoginIntent::Completed(Resource::Success(LoginResponse {
        token: token.map(str::to_string),
        error: error.map(str::to_string),
    }))
}

#[test]
fn submit_starts_loading_and_clears_error() {
    let state = LoginState {
        error: "old".to_string(),
        ..LoginState::default()
    };
    let state = LoginReducer::reduce(state, LoginIntent::Submit);
    assert!(state.is_loading);
    assert!(!state.has_error());
}

#[test]
fn success_stores_token() {
    let state = LoginReducer::reduce(LoginState::default(), LoginIntent::Submit);
    let state = LoginReducer::reduce(state, completed(Some("T"), None));
    assert_eq!(
        state,
        LoginState {
            is_loading: false,
            token: Some("T".to_string()),
            error: String::new(),
        }
    );
}

#[test]
fn success_body_with_error_field_is_an_error() {
    let state = LoginReducer::reduce(LoginState::default(), completed(None, Some("Banned")));
    assert!(!state.is_loading);
    assert_eq!(state.token, None);
    assert_eq!(state.error, "Banned");
}

#[test]
fn success_body_without_token_uses_unknown_error() {
    let state = LoginReducer::reduce(LoginState::default(), completed(Some(""), None));
    assert_eq!(state.error, LOGIN_UNKNOWN_ERROR);
}

#[test]
fn error_result_keeps_previous_token() {
    let state = LoginState {
        token: Some("T".to_string()),
        ..LoginState::default()
    };
    let state = LoginReducer::reduce(
        state,
        LoginIntent::Completed(Resource::Error("Couldn't reach server".to_string())),
    );
    assert_eq!(state.token.as_deref(), Some("T"));
    assert_eq!(state.error, "Couldn't reach server");
    assert!(!state.is_loading);
}

#[test]
fn loading_result_keeps_spinner() {
    let state = LoginReducer::reduce(LoginState::default(), LoginIntent::Completed(Resource::Loading));
    assert!(state.is_loading);
}
