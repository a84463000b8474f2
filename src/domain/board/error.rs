// 配置エラー

use thiserror::Error;

use super::color::Color;

/// 盤面への配置で呼び出し側の契約違反を表す
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    #[error("座標が範囲外: ({x}, {y})")]
    OutOfRange { x: usize, y: usize },
    #[error("盤面外(INVALID)のマスには置けない: ({x}, {y})")]
    InvalidCoordinate { x: usize, y: usize },
    #[error("完成済みモザイク({mosaic:?})を崩す色: ({x}, {y}) に {color:?}")]
    BreaksMosaic {
        x: usize,
        y: usize,
        color: Color,
        mosaic: Color,
    },
}
