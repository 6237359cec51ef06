//! Summary counts shown above the device table.

use crate::device::Device;

/// Totals derived from a device list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceSummary {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

impl DeviceSummary {
    /// Count devices by their `active` flag.
    #[must_use]
    pub fn from_devices(devices: &[Device]) -> Self {
        let active = devices.iter().filter(|device| device.active).count();
        Self {
            total: devices.len(),
            active,
            inactive: devices.len() - active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::DeviceId;

    fn device(id: u64, active: bool) -> Device {
        Device {
            id: DeviceId::from(id),
            name: format!("device-{id}"),
            esp_32: String::new(),
            gps_latitude: None,
            gps_longitude: None,
            active,
        }
    }

    #[test]
    fn should_be_zero_for_empty_list() {
        assert_eq!(DeviceSummary::from_devices(&[]), DeviceSummary::default());
    }

    #[test]
    fn should_split_active_and_inactive() {
        let devices = [device(1, true), device(2, false), device(3, true)];
        let summary = DeviceSummary::from_devices(&devices);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.active, 2);
        assert_eq!(summary.inactive, 1);
    }

    #[test]
    fn should_always_add_up_to_total() {
        for size in 0..12_u64 {
            let devices: Vec<Device> = (0..size).map(|i| device(i, i % 3 == 0)).collect();
            let summary = DeviceSummary::from_devices(&devices);
            assert_eq!(summary.total, devices.len());
            assert_eq!(summary.active + summary.inactive, summary.total);
        }
    }
}
