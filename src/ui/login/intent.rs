use crate::api::LoginResponse;
use crate::resource::Resource;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginIntent {
    /// Credentials were submitted; a request is about to start.
    Submit,
    /// The login request finished.
    Completed(Resource<LoginResponse>),
}

impl Intent for LoginIntent {}
