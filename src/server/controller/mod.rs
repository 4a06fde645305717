//! Request handlers owned by the server itself.

pub mod resource;
