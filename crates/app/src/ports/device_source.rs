//! Device source port — where the device collection comes from.

use std::future::Future;

use firewatch_domain::device::Device;
use firewatch_domain::error::FetchError;

/// Retrieves the full device collection in server order.
///
/// Returned futures are not required to be `Send`: the production adapter
/// runs on the browser's single-threaded executor.
pub trait DeviceSource {
    /// Fetch every device.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the request fails, the server answers
    /// with a non-2xx status, or the body cannot be decoded.
    fn fetch_devices(&self) -> impl Future<Output = Result<Vec<Device>, FetchError>>;
}
