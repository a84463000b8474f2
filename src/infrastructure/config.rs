// 設定ファイルと盤面ファイルの読み込み

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::placement::CalculatorConfig;

/// JSON 設定を読み込む（パスなしは既定値）
pub fn load_config(path: Option<&Path>) -> Result<CalculatorConfig> {
    let Some(path) = path else {
        return Ok(CalculatorConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("設定ファイルを読めません: {}", path.display()))?;
    let config: CalculatorConfig = serde_json::from_str(&text)
        .with_context(|| format!("設定ファイルの形式が不正: {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// 盤面テキストを読み込む
pub fn read_board(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("盤面ファイルを読めません: {}", path.display()))
}
