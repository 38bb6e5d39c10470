pub mod billing;
pub mod booking;
pub mod inventory;
