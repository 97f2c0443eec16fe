//! Computer opponent: alpha-beta search plus the tiered move policy

pub mod random;
pub mod search;
pub mod strategist;

pub use random::RandomIndex;
pub use search::{SearchEngine, SearchResult};
pub use strategist::{Difficulty, Strategist};
