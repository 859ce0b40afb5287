//! Core game logic: board model, outcome evaluation, search, and
//! move strategies.

pub mod board;
pub mod outcome;
pub mod search;
pub mod strategy;
