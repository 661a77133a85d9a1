//! Sign-in form model and submit flow.
//!
//! DESIGN
//! ======
//! `values` holds the data and rules, `state` the synchronous lifecycle, and
//! `controller` the single async step that talks to the network.

pub mod controller;
pub mod state;
pub mod values;
