//! sedquiz-core — Task catalog, game loop, and executor traits.
//!
//! This crate defines the quiz data model, the built-in task catalog, and the
//! state machine that plays it against any [`traits::CommandExecutor`].

pub mod catalog;
pub mod error;
pub mod game;
pub mod mock;
pub mod model;
pub mod traits;
