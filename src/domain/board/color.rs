// 色型定義（ドメイン層）

use serde::{Deserialize, Serialize};

/// ピクセルの色（実色3種とプレースホルダ）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Purple,   // 'P'
    Yellow,   // 'Y'
    Green,    // 'G'
    Empty,    // '_' 未配置
    Any,      // 'A' / '#' 何でも可
    AnyColor, // 'C' 実色のいずれか
    Invalid,  // 'X' / ' ' 盤面外
}

impl Color {
    /// 実色の列挙順（候補色の試行順）
    pub const CONCRETE: [Color; 3] = [Color::Purple, Color::Yellow, Color::Green];

    /// 曖昧さを考慮した一致判定
    ///
    /// 対称だが推移的ではない（Any は Purple とも Yellow とも一致するが、
    /// Purple と Yellow は一致しない）。
    pub fn matches(self, other: Color) -> bool {
        if self == Color::Invalid || other == Color::Invalid {
            return false;
        }
        self == Color::Any
            || other == Color::Any
            || self == other
            || (self.is_concrete() && other == Color::AnyColor)
            || (self == Color::AnyColor && other.is_concrete())
    }

    /// 実色（Purple / Yellow / Green）か
    pub fn is_concrete(self) -> bool {
        matches!(self, Color::Purple | Color::Yellow | Color::Green)
    }

    /// ピースが置かれている扱いか（Empty / Invalid 以外）
    pub fn is_occupied(self) -> bool {
        !matches!(self, Color::Empty | Color::Invalid)
    }

    /// 1文字トークンから変換（未知の文字は Empty、失敗しない）
    pub fn parse(token: &str) -> Color {
        let mut chars = token.chars();
        let ch = match (chars.next(), chars.next()) {
            (Some(ch), None) => ch,
            _ => return Color::Empty,
        };
        Self::from_char(ch)
    }

    /// 文字から変換
    pub fn from_char(ch: char) -> Color {
        match ch.to_ascii_uppercase() {
            'P' => Color::Purple,
            'Y' => Color::Yellow,
            'G' => Color::Green,
            'A' | '#' => Color::Any,
            'C' => Color::AnyColor,
            'X' | ' ' => Color::Invalid,
            _ => Color::Empty,
        }
    }

    /// 表示用トークン
    pub fn to_char(self) -> char {
        match self {
            Color::Purple => 'P',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Empty => '_',
            Color::Any => 'A',
            Color::AnyColor => 'C',
            Color::Invalid => 'X',
        }
    }

    /// 表示用の名前（大文字）
    pub fn name(self) -> &'static str {
        match self {
            Color::Purple => "PURPLE",
            Color::Yellow => "YELLOW",
            Color::Green => "GREEN",
            Color::Empty => "EMPTY",
            Color::Any => "ANY",
            Color::AnyColor => "ANYCOLOR",
            Color::Invalid => "INVALID",
        }
    }

    /// このプレースホルダと整合する実色の候補
    pub fn concrete_options(self) -> Vec<Color> {
        match self {
            Color::Empty => Self::CONCRETE.to_vec(),
            Color::Invalid => Vec::new(),
            c => Self::CONCRETE.into_iter().filter(|&k| c.matches(k)).collect(),
        }
    }
}
