// 盤面定数

/// ====== 盤面定数 ======
/// 奇数行の列数（偶数行は x=1..COLUMNS-1 の COLUMNS-1 個）
pub const COLUMNS: usize = 7;
/// 行数（y=0 が最下段）
pub const ROWS: usize = 11;
/// モザイク成立に必要な既定の個数
pub const MOSAIC_SIZE: usize = 3;

/// モザイクサイズとして許容する範囲
pub const MIN_MOSAIC_SIZE: usize = 2;
pub const MAX_MOSAIC_SIZE: usize = 7;
/// ずらし格子で全ペアが隣接できる最大個数（三角形）
pub const MAX_COMPACT_MOSAIC_SIZE: usize = 3;

/// 盤面形状の上限
pub const MAX_COLUMNS: usize = 64;
pub const MAX_ROWS: usize = 64;

/// スコアの表示桁（小数点以下5桁）
pub const SCORE_DECIMALS: f64 = 100_000.0;
