pub mod header;
pub mod logo;
