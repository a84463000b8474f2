// アプリケーション層

pub mod placement;

pub use placement::{MoveInput, PlacementService};
