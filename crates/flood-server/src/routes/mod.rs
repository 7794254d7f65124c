pub mod alert;
pub mod info;
pub mod map;
