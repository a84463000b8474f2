// プレゼンテーション層 - テキスト描画

pub mod render;

pub use render::{human_instruction, render_friendly, render_grid, render_recommendation, RenderConfig};
