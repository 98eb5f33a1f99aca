pub mod assignment;
pub mod semester;
pub mod settings;
