mod charts;
mod dashboard;
mod summary_table;

pub use dashboard::ShopAnalyticsDashboard;
