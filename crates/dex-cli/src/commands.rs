pub mod dispatch;
pub mod find;
pub mod list;
pub mod shared;
pub mod show;
