// モザイク成立条件のValue Object

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_COMPACT_MOSAIC_SIZE, MAX_MOSAIC_SIZE, MIN_MOSAIC_SIZE, MOSAIC_SIZE};

/// モザイクの成立条件
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicRule {
    /// 成立に必要な個数（ちょうどこの個数）
    size: usize,
    /// 全ペアが隣接している必要があるか（3個なら三角形）
    compact: bool,
}

impl MosaicRule {
    pub fn new(size: usize, compact: bool) -> Result<Self> {
        if size < MIN_MOSAIC_SIZE {
            return Err(anyhow!("モザイクサイズは{}以上: {}", MIN_MOSAIC_SIZE, size));
        }
        if size > MAX_MOSAIC_SIZE {
            return Err(anyhow!("モザイクサイズが大きすぎます: {}", size));
        }
        if compact && size > MAX_COMPACT_MOSAIC_SIZE {
            return Err(anyhow!(
                "全ペア隣接のモザイクは{}個まで: {}",
                MAX_COMPACT_MOSAIC_SIZE,
                size
            ));
        }
        Ok(Self { size, compact })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn compact(&self) -> bool {
        self.compact
    }

    pub fn validate(&self) -> Result<()> {
        Self::new(self.size, self.compact).map(|_| ())
    }
}

impl Default for MosaicRule {
    fn default() -> Self {
        Self {
            size: MOSAIC_SIZE,
            compact: true,
        }
    }
}
