//! Request handlers.

pub mod chat;
pub mod correction;
pub mod health;
pub mod process;
pub mod unimplemented;
