pub mod config;
pub mod error;
pub mod feed;
pub mod models;
pub mod range;

pub use config::FeedConfig;
pub use error::FeedError;
pub use feed::{BloombergFeed, PriceHistorySource, get_price_series};
pub use models::{PricePoint, PriceSeries};
