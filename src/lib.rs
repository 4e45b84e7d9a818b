//! AI Image Detector (CLI)
//!
//! Web版と同じウィジェット状態機械を使って画像を推論サービスへ送信する

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod scanner;
