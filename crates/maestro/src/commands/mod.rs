pub mod down;
pub mod list;
pub mod up;
pub mod validate;
