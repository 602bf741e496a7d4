mod chart_data;
mod config;
mod view;

pub use chart_data::ChartData;
pub use config::ChartViewConfig;
pub use view::{ChartView, RefreshTicket, process_data};
