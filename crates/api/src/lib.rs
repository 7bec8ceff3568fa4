//! HTTP API: product workflows, rendering, routing.

pub mod app;
pub mod middleware;
pub mod render;
pub mod workflows;
