pub mod listing_source;
