//! Greedy autoplay strategy over the core API.

mod error;
mod greedy;
mod trace;

pub use error::*;
pub use greedy::*;
pub use trace::*;
