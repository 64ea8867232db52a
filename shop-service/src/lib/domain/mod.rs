pub mod access;
pub mod cart;
pub mod flower;
pub mod user;
