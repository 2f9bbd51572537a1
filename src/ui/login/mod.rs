mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::LoginIntent;
pub use reducer::{LoginReducer, LOGIN_UNKNOWN_ERROR};
pub use state::LoginState;
pub use view_model::{LoginEvent, LoginViewModel};
