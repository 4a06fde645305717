//! Wire-level types shared by the HTTP layer.

pub mod api;
