// 配置計算の設定Value Objects

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::board::GridShape;
use crate::domain::mosaic::MosaicRule;

/// スコアの重み
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// 新たに完成したモザイク1つあたり
    pub complete: f64,
    /// 一致する隣接セル1つあたり
    pub neighbor: f64,
    /// 連結成分の進捗（個数 / 成立個数）
    pub progress: f64,
    /// 連結成分が完成不可能になったときの減点
    pub invalid_penalty: f64,
}

impl ScoreWeights {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("complete", self.complete),
            ("neighbor", self.neighbor),
            ("progress", self.progress),
            ("invalid_penalty", self.invalid_penalty),
        ];
        for (name, v) in fields {
            if !v.is_finite() || v < 0.0 {
                return Err(anyhow!("重み{}は0以上の有限値: {}", name, v));
            }
        }
        Ok(())
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            complete: 10.0,
            neighbor: 1.0,
            progress: 1.0,
            invalid_penalty: 5.0,
        }
    }
}

/// 計算機の設定
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub grid: GridShape,
    pub rule: MosaicRule,
    pub weights: ScoreWeights,
}

impl CalculatorConfig {
    pub fn validate(&self) -> Result<()> {
        GridShape::new(self.grid.columns(), self.grid.rows()).context("盤面形状が不正です")?;
        self.rule.validate().context("モザイク条件が不正です")?;
        self.weights.validate().context("スコアの重みが不正です")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(CalculatorConfig::default().validate().is_ok());
    }

    #[test]
    fn weights_reject_negative_and_nan() {
        let mut w = ScoreWeights::default();
        w.neighbor = -1.0;
        assert!(w.validate().is_err());
        w.neighbor = f64::NAN;
        assert!(w.validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: CalculatorConfig =
            serde_json::from_str(r#"{"weights": {"complete": 20.0}, "rule": {"size": 4, "compact": false}}"#)
                .unwrap();
        assert_eq!(cfg.weights.complete, 20.0);
        assert_eq!(cfg.weights.neighbor, 1.0);
        assert_eq!(cfg.rule.size(), 4);
        assert_eq!(cfg.grid, GridShape::default());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn invalid_grid_in_json_is_caught() {
        let cfg: CalculatorConfig =
            serde_json::from_str(r#"{"grid": {"columns": 1, "rows": 3}}"#).unwrap();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn oversized_grid_in_json_is_caught() {
        let cfg: CalculatorConfig =
            serde_json::from_str(r#"{"grid": {"columns": 4294967296, "rows": 4294967296}}"#).unwrap();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn unreachable_compact_rule_is_caught() {
        let cfg: CalculatorConfig =
            serde_json::from_str(r#"{"rule": {"size": 4, "compact": true}}"#).unwrap();
        assert!(cfg.validate().is_err());
    }
}
