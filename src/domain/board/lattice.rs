// ずらし格子（レンガ状）の形状と隣接計算

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{COLUMNS, MAX_COLUMNS, MAX_ROWS, ROWS};

/// 盤面形状
///
/// 奇数行は x=0..columns、偶数行は半マス右にずれて x=1..columns。
/// y=0 が最下段（偶数行）。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    columns: usize,
    rows: usize,
}

impl GridShape {
    pub fn new(columns: usize, rows: usize) -> Result<Self> {
        if columns < 2 {
            return Err(anyhow!("列数は2以上である必要があります: {}", columns));
        }
        if rows == 0 {
            return Err(anyhow!("行数は1以上である必要があります"));
        }
        if columns > MAX_COLUMNS || rows > MAX_ROWS {
            return Err(anyhow!(
                "盤面が大きすぎます: {}x{}（上限 {}x{}）",
                columns,
                rows,
                MAX_COLUMNS,
                MAX_ROWS
            ));
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// 行の先頭 x（偶数行は 1）
    #[inline]
    pub fn row_start(y: usize) -> usize {
        if y % 2 == 0 {
            1
        } else {
            0
        }
    }

    /// アドレス可能な座標か
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        y < self.rows && x < self.columns && x >= Self::row_start(y)
    }

    /// 内部配列のインデックス
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.columns + x
    }

    /// 全マス数（欠けマス込み）
    pub fn capacity(&self) -> usize {
        self.columns * self.rows
    }

    /// アドレス可能な座標を y 昇順・x 昇順で列挙
    pub fn coords(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows).flat_map(move |y| (Self::row_start(y)..self.columns).map(move |x| (x, y)))
    }

    /// 隣接座標（範囲外は除外）
    pub fn neighbors(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        let (xi, yi) = (x as isize, y as isize);
        // 偶数行は上下の x-1, x、奇数行は上下の x, x+1 と接する
        let shift: isize = if y % 2 == 0 { -1 } else { 0 };
        let dirs: [(isize, isize); 6] = [
            (-1, 0),
            (1, 0),
            (shift, -1),
            (shift + 1, -1),
            (shift, 1),
            (shift + 1, 1),
        ];
        let mut out = Vec::with_capacity(6);
        for (dx, dy) in dirs {
            let nx = xi + dx;
            let ny = yi + dy;
            if nx < 0 || ny < 0 {
                continue;
            }
            let (nxu, nyu) = (nx as usize, ny as usize);
            if self.contains(nxu, nyu) {
                out.push((nxu, nyu));
            }
        }
        out
    }

    pub fn is_adjacent(&self, a: (usize, usize), b: (usize, usize)) -> bool {
        self.neighbors(a.0, a.1).contains(&b)
    }
}

impl Default for GridShape {
    fn default() -> Self {
        Self {
            columns: COLUMNS,
            rows: ROWS,
        }
    }
}
