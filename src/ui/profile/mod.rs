mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::ProfileIntent;
pub use reducer::ProfileReducer;
pub use state::ProfileState;
pub use view_model::{ProfileEvent, ProfileViewModel, PROFILE_UPDATED_MESSAGE};
