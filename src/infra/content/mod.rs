pub mod card_csv;
