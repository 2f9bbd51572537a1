/// Marker trait for screen state.
///
/// `Default` is the state a screen starts in; `PartialEq` lets callers
/// detect whether an intent changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
