//! Outcome wrapper shared by every network operation.
//!
//! Repositories and use cases return a [`Resource`]; the presentation layer
//! feeds it into reducers. An error always carries a readable message.

/// Message used whenever the server could not be reached or its reply
/// could not be understood.
pub const CONNECTIVITY_ERROR: &str = "Couldn't reach server. Check your internet connection.";

/// Tagged outcome of an asynchronous operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource<T> {
    /// Operation in flight.
    Loading,
    /// Operation finished with a payload.
    Success(T),
    /// Operation failed; the message is never empty.
    Error(String),
}

impl<T> Resource<T> {
    pub fn success(data: T) -> Self {
        Resource::Success(data)
    }

    /// Build an error, falling back to [`CONNECTIVITY_ERROR`] for a blank message.
    pub fn error(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Resource::Error(CONNECTIVITY_ERROR.to_string())
        } else {
            Resource::Error(message)
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Resource::Success(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Resource::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Resource::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> Resource<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Resource::Loading => Resource::Loading,
            Resource::Success(data) => Resource::Success(f(data)),
            Resource::Error(message) => Resource::Error(message),
        }
    }

    /// Convert a finished resource into a `Result`.
    ///
    /// `Loading` has no outcome yet and is reported as `None`.
    pub fn into_result(self) -> Option<Result<T, String>> {
        match self {
            Resource::Loading => None,
            Resource::Success(data) => Some(Ok(data)),
            Resource::Error(message) => Some(Err(message)),
        }
    }
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Resource::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_error_message_falls_back_to_connectivity() {
        let resource: Resource<()> = Resource::error("   ");
        assert_eq!(resource.message(), Some(CONNECTIVITY_ERROR));
    }

    #[test]
    fn error_keeps_server_message() {
        let resource: Resource<()> = Resource::error("Invalid credentials");
        assert_eq!(resource, Resource::Error("Invalid credentials".to_string()));
    }

    #[test]
    fn map_preserves_variant() {
        assert_eq!(Resource::success(2).map(|n| n * 10), Resource::Success(20));
        assert_eq!(
            Resource::<i32>::error("boom").map(|n| n * 10),
            Resource::Error("boom".to_string())
        );
        assert!(Resource::<i32>::Loading.map(|n| n * 10).is_loading());
    }

    #[test]
    fn into_result_reports_loading_as_none() {
        assert_eq!(Resource::<u8>::Loading.into_result(), None);
        assert_eq!(Resource::success(1u8).into_result(), Some(Ok(1)));
        assert_eq!(
            Resource::<u8>::error("nope").into_result(),
            Some(Err("nope".to_string()))
        );
    }

    #[test]
    fn accessors_match_variant() {
        let ok = Resource::success("payload");
        assert!(ok.is_success());
        assert_eq!(ok.data(), Some(&"payload"));
        assert_eq!(ok.message(), None);
    }
}
