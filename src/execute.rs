//! Execute trait for running API requests

use crate::error::Result;

/// Sends a built request and runs its processor over the response.
///
/// Request builders implement this; their inherent `.get()` forwards here so
/// callers do not need the trait in scope.
pub trait Execute {
    /// Value produced by the builder's processor
    type Output;

    /// Send the request and process the response
    fn get(self) -> impl std::future::Future<Output = Result<Self::Output>>;
}
