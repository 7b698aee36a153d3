pub mod roster;
pub mod seed;

pub use roster::{Roster, RosterError};
