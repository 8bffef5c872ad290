pub mod entities;
pub mod visibility;
