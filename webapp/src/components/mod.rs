pub mod back_to_top;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod loader;
pub mod navbar;
pub mod sections;
