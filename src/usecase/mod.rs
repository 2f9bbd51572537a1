//! Use cases: input validation in front of the repositories.

mod login;
mod profile;

pub use login::{LoginUseCase, EMPTY_CREDENTIALS_ERROR};
pub use profile::{GetProfileUseCase, UpdateProfileUseCase, MISSING_TOKEN_ERROR};
