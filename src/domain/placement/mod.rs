// ドメイン層 - 配置計算

pub mod calculator;
pub mod config;
pub mod recommendation;

pub use calculator::PlacementCalculator;
pub use config::{CalculatorConfig, ScoreWeights};
pub use recommendation::Recommendation;
