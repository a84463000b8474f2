// ドメイン層 - ビジネスロジックの中核

pub mod board;
pub mod mosaic;
pub mod placement;
