//! Client for the resources REST API

mod client;

pub use client::*;
