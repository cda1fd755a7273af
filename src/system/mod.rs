pub mod collector;
pub mod platform;
pub mod snapshot;
pub mod thermal;
