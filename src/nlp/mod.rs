//! Text-level helpers shared by the detector and the strategies

pub mod metadata;
pub mod normalize;
pub mod patterns;
pub mod sentences;
