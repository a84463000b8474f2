// モザイク配置計算機 - ライブラリモジュール

pub mod constants;
pub mod domain;         // ドメイン層
pub mod application;    // アプリケーション層
pub mod infrastructure; // インフラ層
pub mod presentation;   // プレゼンテーション層
pub mod logging;

// 外部クレートの再エクスポート
pub use anyhow::{anyhow, Context, Result};

// 主要な型を再エクスポート
pub use application::{MoveInput, PlacementService};
pub use domain::board::{Cell, Color, GridShape, GridStore, PlaceError};
pub use domain::mosaic::{Mosaic, MosaicRule};
pub use domain::placement::{CalculatorConfig, PlacementCalculator, Recommendation, ScoreWeights};
