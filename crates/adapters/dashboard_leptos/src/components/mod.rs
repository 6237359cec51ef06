mod device_map;
mod device_table;
mod loading;
mod stat_card;
mod status_badge;

pub use device_map::DeviceMap;
pub use device_table::DeviceTable;
pub use loading::Loading;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
