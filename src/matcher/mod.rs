//! Term matching: normalization, sliding-window scoring and ranking.
//!
//! Every function here is pure. The same search term, candidates and count always
//! produce the same suggestions, and nothing is shared between calls.

mod normalize;
mod rank;
mod score;

pub use normalize::normalize;
pub use rank::{Suggestion, rank, suggest};
pub use score::window_score;
