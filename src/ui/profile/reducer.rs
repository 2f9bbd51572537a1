use crate::resource::Resource;
use crate::ui::mvi::Reducer;
use crate::ui::profile::intent::ProfileIntent;
use crate::ui::profile::state::ProfileState;

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::Requested => ProfileState {
                is_loading: true,
                error: String::new(),
                ..state
            },
            ProfileIntent::Loaded(Resource::Loading) => ProfileState {
                is_loading: true,
                ..state
            },
            ProfileIntent::Loaded(Resource::Success(response)) => {
                let server_error = response.error.filter(|e| !e.trim().is_empty());
                match (response.data, server_error) {
                    // Error-only body: keep what is on screen.
                    (None, Some(error)) => ProfileState {
                        is_loading: false,
                        error,
                        ..state
                    },
                    // Last fetched wins, including an empty payload.
                    (data, _) => ProfileState {
                        is_loading: false,
                        profile: data,
                        error: String::new(),
                    },
                }
            }
            ProfileIntent::Loaded(Resource::Error(message)) => ProfileState {
                is_loading: false,
                error: message,
                ..state
            },
        }
    }
}
