pub mod dashboard;
pub mod dispatch;
pub mod entry;
pub mod habit;
pub mod info;
pub mod reflect;
pub mod shared;
pub mod stats;
pub mod user;
