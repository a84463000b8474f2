// 盤面関連のドメイン層

pub mod cell;
pub mod color;
pub mod error;
pub mod grid;
pub mod lattice;
mod text;

pub use cell::Cell;
pub use color::Color;
pub use error::PlaceError;
pub use grid::GridStore;
pub use lattice::GridShape;
