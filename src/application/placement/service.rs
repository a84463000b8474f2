// 配置推奨サービス

use anyhow::{anyhow, Context, Result};

use crate::domain::board::{Cell, Color, GridStore};
use crate::domain::placement::{CalculatorConfig, PlacementCalculator, Recommendation};
use crate::vlog;

/// 1手の入力
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveInput {
    /// (x, y) に色トークンを置く
    Place { x: usize, y: usize, color: Color },
    /// 盤面が埋まるまで推奨手を打ち続ける
    Solve,
}

impl MoveInput {
    /// `x y トークン` または `solve` を解釈
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        if line.eq_ignore_ascii_case("solve") {
            return Ok(MoveInput::Solve);
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(anyhow!("入力は `x y 色` か `solve`: {:?}", line));
        }
        let x = parts[0].parse::<usize>().with_context(|| format!("x が不正: {}", parts[0]))?;
        let y = parts[1].parse::<usize>().with_context(|| format!("y が不正: {}", parts[1]))?;
        Ok(MoveInput::Place {
            x,
            y,
            color: Color::parse(parts[2]),
        })
    }
}

/// 盤面の読み込み・推奨計算・自動解答を管理するサービス
pub struct PlacementService {
    config: CalculatorConfig,
    calculator: PlacementCalculator,
}

impl PlacementService {
    pub fn new(config: CalculatorConfig) -> Self {
        let calculator = PlacementCalculator::new(config.weights);
        Self { config, calculator }
    }

    /// 設定の検証
    fn validate_config(&self) -> Result<()> {
        self.config.validate().context("設定が不正です")
    }

    /// 空の盤面
    pub fn new_grid(&self) -> Result<GridStore> {
        self.validate_config()?;
        Ok(GridStore::new(self.config.grid, self.config.rule))
    }

    /// テキスト盤面を読み込む
    pub fn load_board(&self, text: &str) -> Result<GridStore> {
        self.validate_config()?;
        GridStore::from_text(text, self.config.grid, self.config.rule).context("盤面の読み込みに失敗しました")
    }

    /// 順位付きの推奨セル
    pub fn rank(&self, grid: &GridStore) -> Vec<Cell> {
        self.calculator.rank(grid)
    }

    /// 順位付きの推奨レコード
    pub fn recommend(&self, grid: &GridStore) -> Vec<Recommendation> {
        self.rank(grid).iter().map(Recommendation::from).collect()
    }

    /// 1手を盤面に反映
    pub fn apply_move(&self, grid: &mut GridStore, x: usize, y: usize, color: Color) -> Result<()> {
        vlog!("[手] ({}, {}) に {} を配置", x, y, color.name());
        grid.place(Cell::new(x, y, color))
            .with_context(|| format!("({}, {}) に {} を置けません", x, y, color.name()))
    }

    /// 推奨手の色を実色へ確定
    ///
    /// 推奨色がなくプレースホルダのままなら、それと整合する最初の実色。
    fn resolve_color(cell: &Cell) -> Option<Color> {
        let c = cell.effective_color();
        if c.is_concrete() {
            return Some(c);
        }
        c.concrete_options().into_iter().next()
    }

    /// 盤面が埋まるまで先頭の推奨手を打つ
    ///
    /// 打った手を順に返す。
    pub fn solve(&self, grid: &mut GridStore) -> Result<Vec<Cell>> {
        let mut placed = Vec::new();
        // 1手ごとに未確定マスが1つ減るので座標数で打ち切れる
        let limit = grid.shape().coords().count();
        while !grid.is_full() {
            if placed.len() >= limit {
                return Err(anyhow!("自動解答が{}手で収束しませんでした", limit));
            }
            let ranked = self.rank(grid);
            let Some(head) = ranked.first() else {
                break;
            };
            let color = Self::resolve_color(head)
                .ok_or_else(|| anyhow!("({}, {}) に置ける色がありません", head.x, head.y))?;
            self.apply_move(grid, head.x, head.y, color)?;
            placed.push(head.with_color(color));
        }
        vlog!("[自動解答] {}手 モザイク数={}", placed.len(), grid.mosaic_count());
        Ok(placed)
    }

    /// 設定を更新
    pub fn update_config(&mut self, config: CalculatorConfig) {
        self.calculator = PlacementCalculator::new(config.weights);
        self.config = config;
    }

    /// 現在の設定を取得
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }
}

impl Default for PlacementService {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}
