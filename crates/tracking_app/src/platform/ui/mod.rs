pub mod dates;
pub mod render;
