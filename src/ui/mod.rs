pub mod login;
pub mod mvi;
pub mod navigation;
pub mod profile;
