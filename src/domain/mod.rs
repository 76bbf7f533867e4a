pub mod entities;
pub mod error;
pub mod ports;
pub mod ranking;
pub mod similarity;
pub mod store;
