pub mod system;
pub mod vendors;
