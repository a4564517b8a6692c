//! WebApp - liveness/readiness probe target for EKS
//!
//! This library exposes the router and server so they can be tested.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
