pub mod contact;
pub mod loader;
pub mod scroll;
pub mod theme;
