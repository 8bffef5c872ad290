pub mod home;
pub mod info_form;
pub mod categories;
pub mod topic;
pub mod adapted_home;
pub mod contact;
pub mod login;
pub mod not_found;
