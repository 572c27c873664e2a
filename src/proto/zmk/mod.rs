pub mod behaviors;
pub mod core;
pub mod keymap;
pub mod meta;
pub mod studio;
