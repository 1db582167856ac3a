//! User administration and invoice intake API.
//!
//! Layers follow a ports-and-adapters split: `domain` holds entities,
//! repository traits and the invoice payload checks, `application` holds
//! one use case per operation, `adapters::http` exposes them over
//! actix-web and `infrastructure` provides configuration and PostgreSQL
//! repositories.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
pub(crate) mod test_support;
