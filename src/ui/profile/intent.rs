use crate::api::ProfileResponse;
use crate::resource::Resource;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileIntent {
    /// A fetch or update is about to start.
    Requested,
    /// The fetch or update finished.
    Loaded(Resource<ProfileResponse>),
}

impl Intent for ProfileIntent {}
