// 推奨手の公開レコード

use serde::{Deserialize, Serialize};

use crate::domain::board::{Cell, Color};

/// 描画側へ渡す1件分の推奨
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub x: usize,
    pub y: usize,
    /// 推奨色があればそれ、なければ盤面上の色
    pub color: Color,
    /// 盤面上の色
    pub placed: Color,
    pub recommended: Option<Color>,
    pub score: f64,
}

impl From<&Cell> for Recommendation {
    fn from(cell: &Cell) -> Self {
        Self {
            x: cell.x,
            y: cell.y,
            color: cell.effective_color(),
            placed: cell.color,
            recommended: cell.recommended(),
            score: cell.score(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_carries_effective_color() {
        let mut cell = Cell::candidate(3, 4, Color::Empty);
        cell.recommended = Some(Color::Green);
        cell.score = 2.5;
        let rec = Recommendation::from(&cell);
        assert_eq!((rec.x, rec.y), (3, 4));
        assert_eq!(rec.color, Color::Green);
        assert_eq!(rec.placed, Color::Empty);
        assert_eq!(rec.recommended, Some(Color::Green));
    }

    #[test]
    fn serializes_to_json() {
        let rec = Recommendation::from(&Cell::new(1, 0, Color::Any));
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"color\":\"Any\""));
        assert!(json.contains("\"recommended\":null"));
    }
}
