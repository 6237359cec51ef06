mod dashboard;
mod not_found;

pub use dashboard::DeviceDashboard;
pub use not_found::NotFound;
