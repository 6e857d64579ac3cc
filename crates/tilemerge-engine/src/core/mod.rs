//! Core data structures: the board, move directions and line resolution.
//!
//! Everything in this module is free of randomness and game bookkeeping.
//! [`Game`](crate::Game) combines these pieces with a tile spawner and the
//! turn history.

pub use self::{board::*, direction::*, line::*};

pub(crate) mod board;
pub(crate) mod direction;
pub(crate) mod line;
