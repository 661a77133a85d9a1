//! Networking for the sign-in endpoint.

pub mod api;
