// モザイク検出（隣接グラフ上の連結成分）

use std::collections::VecDeque;

use super::result::{Cluster, ClusterStatus};
use super::rule::MosaicRule;
use crate::domain::board::{Color, GridShape, GridStore};

/// 未確定セルが連結成分の要素になれるか
#[inline]
fn is_growable(grid: &GridStore, x: usize, y: usize) -> bool {
    grid.color_at(x, y).is_occupied() && !grid.is_locked(x, y)
}

/// 起点から連結セルを集める
///
/// 辺は隣接かつ2色が `matches` するときだけ張る。`matches` は推移的でないので、
/// 成分内の全ペアが一致するとは限らない。
fn grow(grid: &GridStore, sx: usize, sy: usize, visited: &mut [bool]) -> Vec<(usize, usize)> {
    let shape = grid.shape();
    let mut q = VecDeque::new();
    let mut out = Vec::new();
    visited[shape.index(sx, sy)] = true;
    q.push_back((sx, sy));
    out.push((sx, sy));
    while let Some((x, y)) = q.pop_front() {
        let color = grid.color_at(x, y);
        for (nx, ny) in shape.neighbors(x, y) {
            let ni = shape.index(nx, ny);
            if visited[ni] || !is_growable(grid, nx, ny) {
                continue;
            }
            if color.matches(grid.color_at(nx, ny)) {
                visited[ni] = true;
                q.push_back((nx, ny));
                out.push((nx, ny));
            }
        }
    }
    out.sort_by_key(|&(x, y)| (y, x));
    out
}

/// 集約色
///
/// 実色が1種ならその色、実色なしなら AnyColor（含む場合）か Any、
/// 異なる実色が混在すれば Invalid。
pub fn aggregate_color<I>(colors: I) -> Color
where
    I: IntoIterator<Item = Color>,
{
    let mut concrete: Option<Color> = None;
    let mut any_color = false;
    for c in colors {
        if c.is_concrete() {
            match concrete {
                Some(k) if k != c => return Color::Invalid,
                _ => concrete = Some(c),
            }
        } else if c == Color::AnyColor {
            any_color = true;
        } else if c == Color::Invalid {
            return Color::Invalid;
        }
    }
    match (concrete, any_color) {
        (Some(k), _) => k,
        (None, true) => Color::AnyColor,
        (None, false) => Color::Any,
    }
}

fn is_pairwise_adjacent(shape: &GridShape, members: &[(usize, usize)]) -> bool {
    members
        .iter()
        .enumerate()
        .all(|(i, &a)| members[i + 1..].iter().all(|&b| shape.is_adjacent(a, b)))
}

/// 成立条件で分類
fn classify(grid: &GridStore, rule: &MosaicRule, members: Vec<(usize, usize)>) -> Cluster {
    let color = aggregate_color(members.iter().map(|&(x, y)| grid.color_at(x, y)));
    let status = if color == Color::Invalid || members.len() > rule.size() {
        ClusterStatus::Invalid
    } else if members.len() == rule.size() {
        // ちょうどの個数で形が合わなければもう完成しない
        if !rule.compact() || is_pairwise_adjacent(grid.shape(), &members) {
            ClusterStatus::Complete
        } else {
            ClusterStatus::Invalid
        }
    } else {
        ClusterStatus::Forming
    };
    Cluster {
        members,
        color,
        status,
    }
}

/// 未確定セルの全連結成分（y 昇順・x 昇順の起点順）
pub fn find_clusters(grid: &GridStore) -> Vec<Cluster> {
    let shape = grid.shape();
    let mut visited = vec![false; shape.capacity()];
    let mut found = Vec::new();
    for (x, y) in shape.coords() {
        if visited[shape.index(x, y)] || !is_growable(grid, x, y) {
            continue;
        }
        let members = grow(grid, x, y, &mut visited);
        found.push(classify(grid, grid.rule(), members));
    }
    found
}

/// 指定座標を含む連結成分（空き・確定済みなら None）
pub fn cluster_at(grid: &GridStore, x: usize, y: usize) -> Option<Cluster> {
    let shape = grid.shape();
    if !shape.contains(x, y) || !is_growable(grid, x, y) {
        return None;
    }
    let mut visited = vec![false; shape.capacity()];
    let members = grow(grid, x, y, &mut visited);
    Some(classify(grid, grid.rule(), members))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::Cell;

    fn grid_with(cells: &[(usize, usize, Color)]) -> GridStore {
        let mut grid = GridStore::default();
        for &(x, y, c) in cells {
            grid.place(Cell::new(x, y, c)).unwrap();
        }
        grid
    }

    #[test]
    fn aggregate_of_single_concrete() {
        let c = aggregate_color([Color::Purple, Color::Any, Color::AnyColor]);
        assert_eq!(c, Color::Purple);
    }

    #[test]
    fn aggregate_of_placeholders() {
        assert_eq!(aggregate_color([Color::Any, Color::AnyColor]), Color::AnyColor);
        assert_eq!(aggregate_color([Color::Any, Color::Any]), Color::Any);
    }

    #[test]
    fn aggregate_conflict_is_invalid() {
        assert_eq!(aggregate_color([Color::Purple, Color::Any, Color::Yellow]), Color::Invalid);
    }

    #[test]
    fn pair_is_forming() {
        let grid = grid_with(&[(1, 1, Color::Green), (2, 1, Color::Green)]);
        let clusters = find_clusters(&grid);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].status, ClusterStatus::Forming);
        assert_eq!(clusters[0].color, Color::Green);
    }

    #[test]
    fn different_colors_do_not_connect() {
        let grid = grid_with(&[(1, 1, Color::Green), (2, 1, Color::Purple)]);
        assert_eq!(find_clusters(&grid).len(), 2);
    }

    #[test]
    fn any_bridges_non_matching_colors_into_one_invalid_group() {
        // P - A - Y は A 経由で連結するが色が衝突する
        let grid = grid_with(&[(1, 1, Color::Purple), (2, 1, Color::Any), (3, 1, Color::Yellow)]);
        let cluster = cluster_at(&grid, 1, 1).unwrap();
        assert_eq!(cluster.members.len(), 3);
        assert_eq!(cluster.color, Color::Invalid);
        assert_eq!(cluster.status, ClusterStatus::Invalid);
    }

    #[test]
    fn straight_line_of_three_cannot_complete() {
        let grid = grid_with(&[(1, 1, Color::Purple), (2, 1, Color::Purple), (3, 1, Color::Purple)]);
        let cluster = cluster_at(&grid, 2, 1).unwrap();
        assert_eq!(cluster.status, ClusterStatus::Invalid);
        assert_eq!(grid.mosaic_count(), 0);
    }

    #[test]
    fn empty_cell_has_no_cluster() {
        let grid = GridStore::default();
        assert!(cluster_at(&grid, 3, 3).is_none());
        assert!(find_clusters(&grid).is_empty());
    }

    #[test]
    fn locked_members_are_excluded() {
        let grid = grid_with(&[(1, 1, Color::Purple), (2, 1, Color::Purple), (2, 2, Color::Purple)]);
        assert_eq!(grid.mosaic_count(), 1);
        assert!(cluster_at(&grid, 1, 1).is_none());
        assert!(find_clusters(&grid).is_empty());
    }
}
