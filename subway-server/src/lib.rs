//! Subway route topology server.
//!
//! Turns a flat list of station-to-station segments into directed,
//! per-line route tables and answers shortest-path queries between
//! stations of the same line.

pub mod config;
pub mod dataset;
pub mod domain;
pub mod failures;
pub mod stations;
pub mod topology;
pub mod web;
