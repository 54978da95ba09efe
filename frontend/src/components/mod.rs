pub mod login;
pub mod nav;
pub mod records;
