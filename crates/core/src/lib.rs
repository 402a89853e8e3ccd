//! Core game logic. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod deck;
pub mod events;
pub mod rng;
pub mod scoring;
pub mod state;

pub use cards::*;
pub use deck::*;
pub use events::*;
pub use rng::*;
pub use scoring::*;
pub use state::*;
