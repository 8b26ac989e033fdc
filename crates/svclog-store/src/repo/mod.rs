//! Snapshot hydration and persistence over a `KvStorage`

pub mod hydration;
pub mod persist;

pub use hydration::{load_state, read_state};
pub use persist::save_state;
