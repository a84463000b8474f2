// GridStore - ずらし格子の盤面とモザイク管理

use super::cell::Cell;
use super::color::Color;
use super::error::PlaceError;
use super::lattice::GridShape;
use crate::domain::mosaic::{aggregate_color, find_clusters, ClusterStatus, Mosaic, MosaicId, MosaicRule};
use crate::vlog;

/// 盤面
///
/// 1座標につき高々1セル。完成したモザイクは確定し、以後の配置で
/// 崩れない（`mosaic_count` は単調非減少）。
#[derive(Clone, Debug)]
pub struct GridStore {
    shape: GridShape,
    rule: MosaicRule,
    cells: Vec<Option<Cell>>,
    mosaics: Vec<Mosaic>,
}

impl GridStore {
    pub fn new(shape: GridShape, rule: MosaicRule) -> Self {
        Self {
            shape,
            rule,
            cells: vec![None; shape.capacity()],
            mosaics: Vec::new(),
        }
    }

    pub fn shape(&self) -> &GridShape {
        &self.shape
    }

    pub fn rule(&self) -> &MosaicRule {
        &self.rule
    }

    /// セルを取得（範囲外・未配置は None）
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        if !self.shape.contains(x, y) {
            return None;
        }
        self.cells[self.shape.index(x, y)].as_ref()
    }

    /// 座標の色（未配置は Empty、範囲外は Invalid）
    pub fn color_at(&self, x: usize, y: usize) -> Color {
        if !self.shape.contains(x, y) {
            return Color::Invalid;
        }
        self.get(x, y).map_or(Color::Empty, |c| c.color)
    }

    /// 確定済みモザイクの要素か
    pub fn is_locked(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(|c| c.mosaic.is_some())
    }

    pub fn neighbors_of(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        self.shape.neighbors(x, y)
    }

    /// 配置済みセルを y 昇順・x 昇順で列挙
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.shape.coords().filter_map(move |(x, y)| self.get(x, y))
    }

    pub fn mosaics(&self) -> &[Mosaic] {
        &self.mosaics
    }

    /// 完成済み（有効）モザイク数
    pub fn mosaic_count(&self) -> usize {
        self.mosaics.len()
    }

    /// セルを置く（上書き可）
    ///
    /// 保存されるのは座標と色だけで、スコアや推奨色は捨てる。
    pub fn place(&mut self, cell: Cell) -> Result<(), PlaceError> {
        let (x, y) = cell.pos();
        if !self.shape.contains(x, y) {
            return Err(PlaceError::OutOfRange { x, y });
        }
        let idx = self.shape.index(x, y);
        let existing = self.cells[idx];
        if existing.is_some_and(|c| c.color == Color::Invalid) {
            return Err(PlaceError::InvalidCoordinate { x, y });
        }

        let mut stored = Cell::new(x, y, cell.color);
        if let Some(tag) = existing.and_then(|c| c.mosaic) {
            // 確定済みモザイクの要素は集約色と一致する色でのみ上書きできる
            if !cell.color.is_occupied() || !cell.color.matches(tag.color) {
                return Err(PlaceError::BreaksMosaic {
                    x,
                    y,
                    color: cell.color,
                    mosaic: tag.color,
                });
            }
            stored.mosaic = Some(tag);
            self.cells[idx] = Some(stored);
            self.refresh_aggregate(tag.id);
            return Ok(());
        }

        self.cells[idx] = Some(stored);
        self.lock_completed();
        Ok(())
    }

    /// 確定済みモザイクの集約色を再計算して要素のタグへ反映
    fn refresh_aggregate(&mut self, id: MosaicId) {
        let Some(mosaic) = self.mosaics.get(id.0) else {
            return;
        };
        let color = aggregate_color(mosaic.members.iter().map(|&(x, y)| self.color_at(x, y)));
        let members = mosaic.members.clone();
        self.mosaics[id.0].color = color;
        let tag = self.mosaics[id.0].tag();
        for (x, y) in members {
            let idx = self.shape.index(x, y);
            if let Some(cell) = self.cells[idx].as_mut() {
                cell.mosaic = Some(tag);
            }
        }
    }

    /// 成立した連結成分をモザイクとして確定
    fn lock_completed(&mut self) {
        for cluster in find_clusters(self) {
            if cluster.status != ClusterStatus::Complete {
                continue;
            }
            let id = MosaicId(self.mosaics.len());
            let mosaic = Mosaic {
                id,
                color: cluster.color,
                members: cluster.members,
            };
            vlog!(
                "[モザイク] 完成 id={} 色={} 要素={:?}",
                id.0,
                mosaic.color.name(),
                mosaic.members
            );
            let tag = mosaic.tag();
            for &(x, y) in &mosaic.members {
                let idx = self.shape.index(x, y);
                if let Some(cell) = self.cells[idx].as_mut() {
                    cell.mosaic = Some(tag);
                }
            }
            self.mosaics.push(mosaic);
        }
    }

    /// 盤面外(INVALID)以外の全座標が実色で埋まっているか
    pub fn is_full(&self) -> bool {
        self.shape.coords().all(|(x, y)| {
            let c = self.color_at(x, y);
            c == Color::Invalid || c.is_concrete()
        })
    }

    /// 未確定の座標（実色でも INVALID でもない）
    pub fn open_positions(&self) -> Vec<(usize, usize)> {
        self.shape
            .coords()
            .filter(|&(x, y)| {
                let c = self.color_at(x, y);
                c != Color::Invalid && !c.is_concrete()
            })
            .collect()
    }

    /// 指定色と一致する最初のセル（見つからなければ None）
    pub fn find_first_matching(&self, color: Color) -> Option<&Cell> {
        self.cells().find(|c| color.matches(c.color))
    }
}

impl Default for GridStore {
    fn default() -> Self {
        Self::new(GridShape::default(), MosaicRule::default())
    }
}
