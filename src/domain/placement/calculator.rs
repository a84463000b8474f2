// 配置計算機 - 空きマスを評価して順位付け

use super::config::ScoreWeights;
use crate::domain::board::{Cell, Color, GridStore};
use crate::domain::mosaic::{cluster_at, ClusterStatus};
use crate::vlog;

/// 空きマスごとの推奨を計算する
///
/// 呼び出し間で状態を持たない。同じ盤面には常に同じ列を返す。
#[derive(Clone, Debug, Default)]
pub struct PlacementCalculator {
    weights: ScoreWeights,
}

impl PlacementCalculator {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// 未確定の全座標を評価し、有望な順に並べる
    pub fn rank(&self, grid: &GridStore) -> Vec<Cell> {
        let mut ranked: Vec<Cell> = grid
            .open_positions()
            .into_iter()
            .map(|(x, y)| self.evaluate_position(grid, x, y))
            .collect();
        ranked.sort_by(Cell::rank_cmp);
        vlog!(
            "[配置計算] 候補数={} 先頭={:?}",
            ranked.len(),
            ranked.first().map(|c| (c.x, c.y, c.effective_color().name(), c.score()))
        );
        ranked
    }

    /// 1座標を評価
    ///
    /// 空きマスは仮のセル（候補）、配置済みのプレースホルダは実セルの
    /// コピーとして返す。`color` は変えず、最良の実色を `recommended` に入れる。
    pub fn evaluate_position(&self, grid: &GridStore, x: usize, y: usize) -> Cell {
        let mut cell = match grid.get(x, y) {
            Some(existing) if existing.color != Color::Empty => {
                let mut c = Cell::new(x, y, existing.color);
                c.mosaic = existing.mosaic();
                c
            }
            _ => Cell::candidate(x, y, Color::Empty),
        };

        let mut best: Option<(Color, f64)> = None;
        for color in cell.color.concrete_options() {
            let Some(value) = self.simulate(grid, x, y, color) else {
                continue;
            };
            vlog!("[配置計算] ({}, {}) {} -> {:.5}", x, y, color.name(), value);
            // 同点は列挙順で先の色を残す
            if best.map_or(true, |(_, v)| value > v) {
                best = Some((color, value));
            }
        }

        if let Some((color, value)) = best {
            cell.recommended = Some(color);
            cell.score = value;
        }
        cell
    }

    /// 実盤面を変えずに `color` を置いた場合の価値
    ///
    /// 置けない（確定モザイクを崩す）場合は None。
    pub fn simulate(&self, grid: &GridStore, x: usize, y: usize, color: Color) -> Option<f64> {
        let mut sim = grid.clone();
        let before = sim.mosaic_count();
        sim.place(Cell::new(x, y, color)).ok()?;
        let completed = sim.mosaic_count().saturating_sub(before);

        let matching_neighbors = grid
            .neighbors_of(x, y)
            .into_iter()
            .filter(|&(nx, ny)| {
                let c = grid.color_at(nx, ny);
                c.is_occupied() && !grid.is_locked(nx, ny) && color.matches(c)
            })
            .count();

        let w = &self.weights;
        let size = grid.rule().size() as f64;
        let shape_term = if sim.is_locked(x, y) {
            w.progress
        } else {
            match cluster_at(&sim, x, y) {
                Some(cluster) if cluster.status == ClusterStatus::Invalid => -w.invalid_penalty,
                Some(cluster) => w.progress * cluster.members.len() as f64 / size,
                None => 0.0,
            }
        };

        Some(w.complete * completed as f64 + w.neighbor * matching_neighbors as f64 + shape_term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(grid: &mut GridStore, cells: &[(usize, usize, Color)]) {
        for &(x, y, c) in cells {
            grid.place(Cell::new(x, y, c)).unwrap();
        }
    }

    #[test]
    fn empty_grid_ranks_every_coordinate() {
        let grid = GridStore::default();
        let ranked = PlacementCalculator::default().rank(&grid);
        assert_eq!(ranked.len(), grid.shape().coords().count());
        // 全て同点なので最下段の左から
        assert_eq!(ranked[0].pos(), (1, 0));
        assert!(ranked.iter().all(|c| c.is_candidate()));
        assert!(ranked.iter().all(|c| c.recommended() == Some(Color::Purple)));
    }

    #[test]
    fn completing_cell_ranks_first() {
        let mut grid = GridStore::default();
        place_all(&mut grid, &[(1, 1, Color::Yellow), (2, 1, Color::Yellow)]);
        let ranked = PlacementCalculator::default().rank(&grid);
        let head = &ranked[0];
        // (2, 0) と (2, 2) の両方が三角形を完成させる。同点なら低い段
        assert_eq!(head.pos(), (2, 0));
        assert_eq!(head.recommended(), Some(Color::Yellow));
        assert!(head.score() > 10.0);
    }

    #[test]
    fn line_extension_is_penalized() {
        let mut grid = GridStore::default();
        place_all(&mut grid, &[(1, 1, Color::Green), (2, 1, Color::Green)]);
        let calc = PlacementCalculator::default();
        let line = calc.simulate(&grid, 3, 1, Color::Green).unwrap();
        let far = calc.simulate(&grid, 5, 7, Color::Green).unwrap();
        assert!(line < far);
        assert!(line < 0.0);
    }

    #[test]
    fn recommendation_never_overwrites_color() {
        let mut grid = GridStore::default();
        place_all(&mut grid, &[(3, 3, Color::Any), (2, 3, Color::Green)]);
        let ranked = PlacementCalculator::default().rank(&grid);
        let any = ranked.iter().find(|c| c.pos() == (3, 3)).unwrap();
        assert_eq!(any.color, Color::Any);
        assert_eq!(any.recommended(), Some(Color::Green));
        assert!(!any.is_candidate());
        assert_eq!(grid.color_at(3, 3), Color::Any);
    }

    #[test]
    fn concrete_cells_are_not_ranked() {
        let mut grid = GridStore::default();
        place_all(&mut grid, &[(1, 0, Color::Purple), (2, 0, Color::Invalid)]);
        let ranked = PlacementCalculator::default().rank(&grid);
        assert!(ranked.iter().all(|c| c.pos() != (1, 0) && c.pos() != (2, 0)));
    }

    #[test]
    fn locked_placeholder_only_takes_matching_colors() {
        let mut grid = GridStore::default();
        place_all(
            &mut grid,
            &[(1, 1, Color::Purple), (2, 1, Color::AnyColor), (2, 2, Color::Purple)],
        );
        assert_eq!(grid.mosaic_count(), 1);
        let calc = PlacementCalculator::default();
        assert!(calc.simulate(&grid, 2, 1, Color::Yellow).is_none());
        let cell = calc.evaluate_position(&grid, 2, 1);
        assert_eq!(cell.recommended(), Some(Color::Purple));
        assert!(cell.is_in_valid_mosaic());
    }

    #[test]
    fn rank_is_deterministic() {
        let mut grid = GridStore::default();
        place_all(
            &mut grid,
            &[(1, 0, Color::Green), (2, 0, Color::Purple), (0, 1, Color::Any), (3, 1, Color::AnyColor)],
        );
        let calc = PlacementCalculator::default();
        let a: Vec<_> = calc.rank(&grid).iter().map(|c| (c.pos(), c.recommended(), c.score())).collect();
        let b: Vec<_> = calc.rank(&grid).iter().map(|c| (c.pos(), c.recommended(), c.score())).collect();
        assert_eq!(a, b);
    }
}
