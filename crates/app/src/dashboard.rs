//! Dashboard state — what the view shows at any moment.
//!
//! A [`Dashboard`] starts in [`Content::Loading`] and is resolved exactly once
//! into [`Content::Loaded`] or [`Content::Failed`]. Independently, at most one
//! loaded device can be selected for the map panel.

use firewatch_domain::device::Device;
use firewatch_domain::error::FetchError;
use firewatch_domain::id::DeviceId;
use firewatch_domain::map::MapView;
use firewatch_domain::summary::DeviceSummary;

use crate::config::MapSettings;

/// The main content area.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// The initial fetch has not resolved yet.
    Loading,
    /// Devices in server order.
    Loaded(Vec<Device>),
    /// The initial fetch failed.
    Failed(FetchError),
}

/// What the map panel displays.
#[derive(Debug, Clone, PartialEq)]
pub enum MapPanel<'a> {
    /// No device selected.
    Placeholder,
    /// Map for the selected device.
    Map { device: &'a Device, view: MapView },
}

/// View state owned by one mounted dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    content: Content,
    selected: Option<DeviceId>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            content: Content::Loading,
            selected: None,
        }
    }
}

impl Dashboard {
    /// A freshly mounted dashboard waiting for its fetch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.content, Content::Loading)
    }

    /// Loaded devices, empty while loading or after a failure.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        match &self.content {
            Content::Loaded(devices) => devices,
            Content::Loading | Content::Failed(_) => &[],
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        match &self.content {
            Content::Failed(err) => Some(err),
            Content::Loading | Content::Loaded(_) => None,
        }
    }

    /// Counts derived from the loaded devices.
    #[must_use]
    pub fn summary(&self) -> DeviceSummary {
        DeviceSummary::from_devices(self.devices())
    }

    /// Apply the outcome of the fetch.
    ///
    /// Returns `false` and leaves the state untouched if the dashboard was
    /// already resolved.
    pub fn resolve(&mut self, result: Result<Vec<Device>, FetchError>) -> bool {
        if !self.is_loading() {
            return false;
        }
        self.content = match result {
            Ok(devices) => Content::Loaded(devices),
            Err(err) => Content::Failed(err),
        };
        self.selected = None;
        true
    }

    /// Select a loaded device and open the map on it.
    ///
    /// Returns `false` if no loaded device has this id.
    pub fn open_map(&mut self, id: &DeviceId) -> bool {
        if self.devices().iter().any(|device| &device.id == id) {
            self.selected = Some(id.clone());
            true
        } else {
            false
        }
    }

    /// Dismiss the map and clear the selection.
    pub fn close_map(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn is_map_open(&self) -> bool {
        self.selected.is_some()
    }

    #[must_use]
    pub fn selected_device(&self) -> Option<&Device> {
        let id = self.selected.as_ref()?;
        self.devices().iter().find(|device| &device.id == id)
    }

    /// Compute the map panel for the current selection.
    #[must_use]
    pub fn map_panel(&self, settings: &MapSettings) -> MapPanel<'_> {
        match self.selected_device() {
            Some(device) => MapPanel::Map {
                device,
                view: MapView::for_location(
                    device.location(),
                    settings.default_center,
                    settings.zoom,
                ),
            },
            None => MapPanel::Placeholder,
        }
    }
}
