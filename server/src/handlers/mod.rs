pub mod asset;
pub mod status;
