pub mod address;
pub mod endpoint;
