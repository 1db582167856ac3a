//! Application layer
//!
//! Use cases that orchestrate domain ports to serve a single request.
//! Each use case receives its collaborators explicitly at construction.

pub mod invoice;
pub mod user;
