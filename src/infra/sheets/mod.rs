pub mod client;
pub mod csv_row;
