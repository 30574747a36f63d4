//! Where to Stream: search the Streaming Availability catalog and see where
//! a movie or series can be watched in a given country.

pub mod config;
pub mod countries;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod views;
