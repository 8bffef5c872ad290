pub mod header;
pub mod info_card;
