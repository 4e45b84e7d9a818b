//! 推論サービス呼び出し

pub mod predict;

pub use predict::submit_image;
