pub mod card;
pub mod remote_row;
pub mod topic;
