pub mod analysis;
pub mod designate;
pub mod filter;
pub mod load_catalog;
pub mod summary;
pub mod tiers;
