// インフラ層 - ファイル入出力

pub mod config;

pub use config::{load_config, read_board};
