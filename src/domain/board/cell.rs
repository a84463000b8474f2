// セル型定義（ドメイン層）

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::color::Color;
use crate::domain::mosaic::MosaicTag;

/// 盤面上の1マス
///
/// 同一性は座標 `(x, y)` のみで決まる（色やスコアは無関係）。
/// ランキング順序は [`Cell::rank_cmp`] で別に定義しており、
/// `==` とは整合しない。重複排除や集合判定に順序を使ってはいけない。
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub color: Color,
    pub(crate) recommended: Option<Color>,
    pub(crate) score: f64,
    pub(crate) mosaic: Option<MosaicTag>,
    pub(crate) is_candidate: bool,
}

impl Cell {
    pub fn new(x: usize, y: usize, color: Color) -> Self {
        Self {
            x,
            y,
            color,
            recommended: None,
            score: 0.0,
            mosaic: None,
            is_candidate: false,
        }
    }

    /// 計算機が生成する仮のセル
    pub fn candidate(x: usize, y: usize, color: Color) -> Self {
        Self {
            is_candidate: true,
            ..Self::new(x, y, color)
        }
    }

    /// 色だけ差し替えたコピー（スコア・候補フラグ・推奨色は引き継ぐ）
    pub fn with_color(&self, color: Color) -> Self {
        Self {
            x: self.x,
            y: self.y,
            color,
            recommended: self.recommended,
            score: self.score,
            mosaic: None,
            is_candidate: self.is_candidate,
        }
    }

    pub fn pos(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// 推奨色があればそれ、なければ配置色
    pub fn effective_color(&self) -> Color {
        self.recommended.unwrap_or(self.color)
    }

    pub fn recommended(&self) -> Option<Color> {
        self.recommended
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn is_candidate(&self) -> bool {
        self.is_candidate
    }

    pub fn mosaic(&self) -> Option<MosaicTag> {
        self.mosaic
    }

    /// 有効なモザイクに属しているか
    pub fn is_in_valid_mosaic(&self) -> bool {
        self.mosaic.is_some_and(|m| m.color != Color::Invalid)
    }

    /// 座標が同じか（`==` と同じ意味の明示版）
    pub fn same_position(&self, other: &Cell) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// 同じ座標のセルを探す
    pub fn counterpart_in<'a, I>(&self, cells: I) -> Option<&'a Cell>
    where
        I: IntoIterator<Item = &'a Cell>,
    {
        cells.into_iter().find(|c| self.same_position(c))
    }

    pub fn is_in<'a, I>(&self, cells: I) -> bool
    where
        I: IntoIterator<Item = &'a Cell>,
    {
        self.counterpart_in(cells).is_some()
    }

    /// ランキング比較
    ///
    /// 1. score 降順
    /// 2. y 昇順
    /// 3. 実セル（非候補）が先
    /// 4. x 昇順
    pub fn rank_cmp(&self, other: &Cell) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.y.cmp(&other.y))
            .then_with(|| self.is_candidate.cmp(&other.is_candidate))
            .then_with(|| self.x.cmp(&other.x))
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.same_position(other)
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}
