pub mod dashboard;
pub mod pricing_panel;
pub mod station_list;

pub use dashboard::Dashboard;
pub use pricing_panel::PricingPanel;
pub use station_list::StationList;
