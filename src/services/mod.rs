pub mod persistence;
pub mod resources;
