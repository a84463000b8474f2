// 盤面のテキスト表現（読み込みと書き出し）

use anyhow::{anyhow, Context, Result};

use super::cell::Cell;
use super::color::Color;
use super::grid::GridStore;
use super::lattice::GridShape;
use crate::domain::mosaic::MosaicRule;

impl GridStore {
    /// テキストから構築
    ///
    /// 1行1段、先頭行が最上段。偶数段は先頭に空白1つを置いてずらす。
    /// トークンは空白区切りの1文字で、`Color::parse` の対応に従う。
    pub fn from_text(text: &str, shape: GridShape, rule: MosaicRule) -> Result<Self> {
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        if lines.len() != shape.rows() {
            return Err(anyhow!(
                "行数が不正: 期待{}、実際{}",
                shape.rows(),
                lines.len()
            ));
        }

        let mut grid = GridStore::new(shape, rule);
        for (i, line) in lines.iter().enumerate() {
            let y = shape.rows() - 1 - i;
            let start = GridShape::row_start(y);
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let expected = shape.columns() - start;
            if tokens.len() != expected {
                return Err(anyhow!(
                    "{}段目のトークン数が不正: 期待{}、実際{}",
                    y,
                    expected,
                    tokens.len()
                ));
            }
            for (k, token) in tokens.iter().enumerate() {
                let x = start + k;
                grid.place(Cell::new(x, y, Color::parse(token)))
                    .with_context(|| format!("({}, {}) への配置に失敗", x, y))?;
            }
        }
        Ok(grid)
    }

    /// テキスト表現に変換（`from_text` の逆）
    pub fn to_text(&self) -> String {
        let shape = self.shape();
        let mut out = String::with_capacity(shape.capacity() * 2 + shape.rows());
        for y in (0..shape.rows()).rev() {
            if GridShape::row_start(y) == 1 {
                out.push(' ');
            }
            let tokens: Vec<String> = (GridShape::row_start(y)..shape.columns())
                .map(|x| self.color_at(x, y).to_char().to_string())
                .collect();
            out.push_str(&tokens.join(" "));
            if y > 0 {
                out.push('\n');
            }
        }
        out
    }
}
