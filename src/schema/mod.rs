pub mod entity;
pub mod event;
pub mod phrase;
pub mod sentence;
