//! Waypath Core Library
//!
//! Breadth-first shortest-path search shared by three domains: an explicit
//! transport network, a 2D occupancy grid and a word ladder.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod grid;
pub mod ladder;
pub mod logging;
pub mod network;
