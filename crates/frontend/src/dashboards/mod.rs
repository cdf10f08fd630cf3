pub mod d404_shop_analytics;

pub use d404_shop_analytics::ui::ShopAnalyticsDashboard;
