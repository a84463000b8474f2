// ドメイン層 - モザイク検出

pub mod detector;
pub mod result;
pub mod rule;

pub use detector::{aggregate_color, cluster_at, find_clusters};
pub use result::{Cluster, ClusterStatus, Mosaic, MosaicId, MosaicTag};
pub use rule::MosaicRule;
