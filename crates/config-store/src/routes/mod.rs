//! Route Handlers

pub mod detection;
pub mod pipeline;
