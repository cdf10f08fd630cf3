pub mod d404_shop_analytics;
