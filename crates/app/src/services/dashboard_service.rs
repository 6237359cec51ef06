//! Dashboard service — the mount lifecycle of the dashboard view.

use firewatch_domain::device::Device;
use firewatch_domain::error::FetchError;

use crate::dashboard::Dashboard;
use crate::ports::DeviceSource;

/// Application service loading the device collection for a dashboard.
#[derive(Debug, Clone)]
pub struct DashboardService<S> {
    source: S,
}

impl<S: DeviceSource> DashboardService<S> {
    /// Create a new service backed by the given device source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch the device collection once, logging a failure.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] reported by the source. No retry is attempted.
    #[tracing::instrument(skip(self))]
    pub async fn fetch(&self) -> Result<Vec<Device>, FetchError> {
        match self.source.fetch_devices().await {
            Ok(devices) => {
                tracing::debug!(count = devices.len(), "devices loaded");
                Ok(devices)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch devices");
                Err(err)
            }
        }
    }

    /// Mount a new dashboard: create it loading, fetch, and resolve it.
    pub async fn mount(&self) -> Dashboard {
        let mut dashboard = Dashboard::new();
        dashboard.resolve(self.fetch().await);
        dashboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::Content;
    use firewatch_domain::id::DeviceId;
    use std::future::Future;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn device(id: u64, active: bool) -> Device {
        Device {
            id: DeviceId::from(id),
            name: format!("device-{id}"),
            esp_32: String::new(),
            gps_latitude: Some("13.75".to_string()),
            gps_longitude: Some("100.50".to_string()),
            active,
        }
    }

    /// Hands out queued responses and counts calls.
    struct ScriptedSource {
        responses: Mutex<Vec<Result<Vec<Device>, FetchError>>>,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        fn with(responses: Vec<Result<Vec<Device>, FetchError>>) -> Self {
            Self {
                responses: Mutex::new(responses),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl DeviceSource for ScriptedSource {
        fn fetch_devices(&self) -> impl Future<Output = Result<Vec<Device>, FetchError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut responses = self.responses.lock().unwrap();
            let next = if responses.is_empty() {
                Ok(Vec::new())
            } else {
                responses.remove(0)
            };
            async move { next }
        }
    }

    #[tokio::test]
    async fn should_load_devices_on_mount() {
        let svc = DashboardService::new(ScriptedSource::with(vec![Ok(vec![
            device(1, true),
            device(2, false),
        ])]));

        let dashboard = svc.mount().await;

        assert!(!dashboard.is_loading());
        assert_eq!(dashboard.devices().len(), 2);
        assert_eq!(dashboard.summary().total, 2);
        assert_eq!(dashboard.summary().active, 1);
    }

    #[tokio::test]
    async fn should_issue_exactly_one_fetch_per_mount() {
        let svc = DashboardService::new(ScriptedSource::with(vec![Ok(vec![device(1, true)])]));

        svc.mount().await;

        assert_eq!(svc.source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_fail_with_message_when_fetch_rejects() {
        let svc = DashboardService::new(ScriptedSource::with(vec![Err(FetchError::transport(
            "Network Error",
        ))]));

        let dashboard = svc.mount().await;

        assert!(!dashboard.is_loading());
        assert!(dashboard.devices().is_empty());
        assert_eq!(
            dashboard.error().map(ToString::to_string).as_deref(),
            Some("Network Error")
        );
    }

    #[tokio::test]
    async fn should_not_retry_after_failure() {
        let svc = DashboardService::new(ScriptedSource::with(vec![Err(FetchError::status(
            500,
            "Internal Server Error",
        ))]));

        let dashboard = svc.mount().await;

        assert!(matches!(dashboard.content(), Content::Failed(_)));
        assert_eq!(svc.source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_keep_remounts_independent() {
        let svc = DashboardService::new(ScriptedSource::with(vec![
            Ok(vec![device(1, true), device(2, true)]),
            Err(FetchError::transport("offline")),
        ]));

        let mut first = svc.mount().await;
        first.open_map(&DeviceId::from(1));
        let second = svc.mount().await;

        assert_eq!(svc.source.calls.load(Ordering::SeqCst), 2);
        assert_eq!(first.devices().len(), 2);
        assert!(first.is_map_open());
        assert!(second.devices().is_empty());
        assert!(second.error().is_some());
        assert!(!second.is_map_open());
    }

    #[tokio::test]
    async fn should_return_source_error_from_fetch() {
        let svc = DashboardService::new(ScriptedSource::with(vec![Err(FetchError::decode(
            "expected a sequence",
        ))]));

        let result = svc.fetch().await;

        assert!(matches!(result, Err(FetchError::Decode { .. })));
    }
}
