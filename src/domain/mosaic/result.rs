// モザイクと連結グループの定義

use serde::{Deserialize, Serialize};

use crate::domain::board::Color;

/// 完成済みモザイクの識別子（完成順の連番）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MosaicId(pub usize);

/// セルが保持するモザイクへの参照（集約色つき）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicTag {
    pub id: MosaicId,
    pub color: Color,
}

/// 完成して確定したモザイク
#[derive(Clone, Debug, PartialEq)]
pub struct Mosaic {
    pub id: MosaicId,
    /// 集約色
    pub color: Color,
    pub members: Vec<(usize, usize)>,
}

impl Mosaic {
    pub fn tag(&self) -> MosaicTag {
        MosaicTag {
            id: self.id,
            color: self.color,
        }
    }
}

/// 連結グループの状態
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClusterStatus {
    /// まだ伸ばせる
    Forming,
    /// 成立条件を満たした
    Complete,
    /// 色の衝突・サイズ超過・形状不一致で完成不可能
    Invalid,
}

/// 未確定セルの連結グループ
#[derive(Clone, Debug, PartialEq)]
pub struct Cluster {
    pub members: Vec<(usize, usize)>,
    pub color: Color,
    pub status: ClusterStatus,
}
