pub mod mount;
pub mod scroll;
pub mod style;
