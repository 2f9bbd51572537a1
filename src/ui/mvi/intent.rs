/// Marker trait for intents.
///
/// An intent is either something the user asked for (submit the login
/// form, refresh the profile) or the finished outcome of a request.
pub trait Intent: Send + 'static {}
