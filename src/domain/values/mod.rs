pub mod currency;
pub mod investment;
pub mod marker;
pub mod metric;
pub mod occupancy;
pub mod platform;
pub mod property_type;
pub mod rating;
pub mod scenario;
pub mod tier;
