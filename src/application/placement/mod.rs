// 配置推奨のアプリケーション層

pub mod service;

pub use service::{MoveInput, PlacementService};
