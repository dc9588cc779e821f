pub mod assets;
pub mod contact;
pub mod health;
pub mod live_ws;
pub mod pages;
