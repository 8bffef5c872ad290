pub mod content;
pub mod sheets;
