pub mod classify;
pub mod entity;
pub mod lawsuit;
pub mod page;
