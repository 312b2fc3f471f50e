pub mod catalog;
pub mod cluster;
pub mod property;
