pub mod entities;
pub mod file_locator;
pub mod policies;
