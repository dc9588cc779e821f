//! maud templates. Copy is in Spanish, like the rest of the club's material.

pub mod boards;
pub mod layout;
pub mod pages;
