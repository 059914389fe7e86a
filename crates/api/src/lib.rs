//! Hallyu API server library.
//!
//! Exposes the building blocks (config, state, error mapping, services, the
//! GraphQL schema, routes) so integration tests and the binary entrypoint
//! share them.

pub mod auth;
pub mod config;
pub mod error;
pub mod graphql;
pub mod router;
pub mod routes;
pub mod services;
pub mod state;
