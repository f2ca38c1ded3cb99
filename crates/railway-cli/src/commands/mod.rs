pub mod describe;
pub mod error_id;
pub mod kinds;
pub mod render;
