//! lineset – a small HTTP service that loads a line-oriented text file into
//! memory and serves both the raw lines and a normalized view of them.

pub mod api;
pub mod data;
pub mod state;
