//! HTTP handlers, one per interaction pattern

pub mod contact;
pub mod convert;
pub mod live;
pub mod profile;
pub mod search;
pub mod users;
