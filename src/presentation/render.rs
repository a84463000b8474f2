// 盤面と推奨手のテキスト描画

use crate::constants::SCORE_DECIMALS;
use crate::domain::board::{Cell, Color, GridShape, GridStore};

const RESET: &str = "\u{1b}[0m";

/// 描画設定
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// 実色を ANSI 色で表示
    pub highlight: bool,
    /// 半マスずらさず、偶数行の欠けマスを `.` で埋めて矩形に並べる
    pub rectangular: bool,
}

/// 操作者に伝える色番号（実色のみ）
pub fn human_instruction(color: Color) -> Option<u8> {
    match color {
        Color::Purple => Some(1),
        Color::Yellow => Some(2),
        Color::Green => Some(3),
        _ => None,
    }
}

/// 1色分のトークン（highlight 時は実色に ANSI 色を付ける）
pub fn color_token(color: Color, config: &RenderConfig) -> String {
    let code = match color {
        Color::Purple => Some("\u{1b}[35m"),
        Color::Yellow => Some("\u{1b}[33m"),
        Color::Green => Some("\u{1b}[32m"),
        _ => None,
    };
    match code {
        Some(code) if config.highlight => format!("{}{}{}", code, color.to_char(), RESET),
        _ => color.to_char().to_string(),
    }
}

/// 盤面（上段から。既定では偶数段を半マスずらす）
pub fn render_grid(grid: &GridStore, config: &RenderConfig) -> String {
    let shape = grid.shape();
    let mut lines = Vec::with_capacity(shape.rows());
    for y in (0..shape.rows()).rev() {
        let start = GridShape::row_start(y);
        let mut tokens: Vec<String> = (start..shape.columns())
            .map(|x| color_token(grid.color_at(x, y), config))
            .collect();
        let pad = if config.rectangular {
            if start == 1 {
                tokens.insert(0, ".".to_string());
            }
            ""
        } else if start == 1 {
            " "
        } else {
            ""
        };
        lines.push(format!("{}{}", pad, tokens.join(" ")));
    }
    lines.join("\n")
}

/// スコアを小数点以下5桁で切り捨て
fn truncate_score(score: f64) -> f64 {
    (score * SCORE_DECIMALS).trunc() / SCORE_DECIMALS
}

/// `(x, y), 推奨色 or 色, スコア`
pub fn render_recommendation(cell: &Cell) -> String {
    let recommended = cell
        .recommended()
        .map(|c| format!("{} or ", c.name()))
        .unwrap_or_default();
    format!(
        "({}, {}), {}{}, {}",
        cell.x,
        cell.y,
        recommended,
        cell.color.name(),
        truncate_score(cell.score())
    )
}

/// 横位置の呼び名（7列盤面用）
pub fn position_label(x: usize, y: usize) -> &'static str {
    let even = y % 2 == 0;
    match x {
        0 => "FAR LEFT",
        1 if even => "FAR LEFT",
        1 => "ALMOST FAR LEFT",
        2 if even => "ALMOST FAR LEFT",
        2 => "LEFT OF CENTER",
        3 if even => "CENTER LEFT",
        3 => "DEAD CENTER",
        4 if even => "CENTER RIGHT",
        4 => "RIGHT OF CENTER",
        5 => "ALMOST FAR RIGHT",
        6 => "FAR RIGHT",
        _ => "UNKNOWN",
    }
}

/// 読み上げ向けの1行（実色なら色番号を添える）
pub fn render_friendly(cell: &Cell) -> String {
    let recommended = cell
        .recommended()
        .map(|c| format!("{} or ", c.name()))
        .unwrap_or_default();
    let key = human_instruction(cell.effective_color())
        .map(|n| format!(", key {}", n))
        .unwrap_or_default();
    format!(
        "{}, {}{}{}",
        position_label(cell.x, cell.y),
        recommended,
        cell.color.name(),
        key
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::placement::PlacementCalculator;

    #[test]
    fn plain_grid_matches_text_form() {
        let mut grid = GridStore::default();
        grid.place(Cell::new(1, 0, Color::Purple)).unwrap();
        grid.place(Cell::new(0, 1, Color::AnyColor)).unwrap();
        assert_eq!(render_grid(&grid, &RenderConfig::default()), grid.to_text());
    }

    #[test]
    fn highlight_wraps_only_concrete_colors() {
        let on = RenderConfig {
            highlight: true,
            ..RenderConfig::default()
        };
        assert_eq!(color_token(Color::Green, &on), "\u{1b}[32mG\u{1b}[0m");
        assert_eq!(color_token(Color::Any, &on), "A");
        assert_eq!(color_token(Color::Green, &RenderConfig::default()), "G");
    }

    #[test]
    fn recommendation_line_format() {
        let mut grid = GridStore::default();
        grid.place(Cell::new(1, 1, Color::Yellow)).unwrap();
        grid.place(Cell::new(2, 1, Color::Yellow)).unwrap();
        let head = PlacementCalculator::default().rank(&grid)[0];
        assert_eq!(render_recommendation(&head), "(2, 0), YELLOW or EMPTY, 13");
        assert_eq!(render_friendly(&head), "ALMOST FAR LEFT, YELLOW or EMPTY, key 2");
    }

    #[test]
    fn rectangular_grid_fills_missing_slot() {
        let shape = GridShape::new(3, 2).unwrap();
        let mut grid = GridStore::new(shape, crate::domain::mosaic::MosaicRule::default());
        grid.place(Cell::new(1, 0, Color::Purple)).unwrap();
        grid.place(Cell::new(0, 1, Color::Green)).unwrap();
        let rect = RenderConfig {
            rectangular: true,
            ..RenderConfig::default()
        };
        assert_eq!(render_grid(&grid, &rect), "G _ _\n. P _");
        assert_eq!(render_grid(&grid, &RenderConfig::default()), "G _ _\n P _");
    }

    #[test]
    fn instruction_digits_only_for_concrete_colors() {
        assert_eq!(human_instruction(Color::Purple), Some(1));
        assert_eq!(human_instruction(Color::Yellow), Some(2));
        assert_eq!(human_instruction(Color::Green), Some(3));
        assert_eq!(human_instruction(Color::AnyColor), None);
        assert_eq!(human_instruction(Color::Empty), None);
    }

    #[test]
    fn score_is_truncated_to_five_places() {
        assert_eq!(truncate_score(1.0 / 3.0), 0.33333);
        assert_eq!(truncate_score(2.0), 2.0);
    }

    #[test]
    fn labels_follow_row_offset() {
        assert_eq!(position_label(1, 0), "FAR LEFT");
        assert_eq!(position_label(1, 1), "ALMOST FAR LEFT");
        assert_eq!(position_label(3, 1), "DEAD CENTER");
        assert_eq!(position_label(3, 2), "CENTER LEFT");
        assert_eq!(position_label(9, 2), "UNKNOWN");
    }
}
