//! Domain layer
//!
//! Contains the portfolio graph model with no external dependencies.
//! - `entities`: Projects, teams, awards and the display language
//! - `ports`: Trait definitions for the remote portfolio API

pub mod entities;
pub mod ports;
