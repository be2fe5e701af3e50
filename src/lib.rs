//! Interactive matrix explorer: a Yew front end over a small matrix store with
//! nearest-value highlighting and row/column aggregates.

pub mod aggregates;
pub mod components;
pub mod config;
pub mod error;
pub mod model;
pub mod nearest;
pub mod state;
pub mod util;
