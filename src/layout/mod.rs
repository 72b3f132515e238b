//! Placement engine for overlay controls
//!
//! Takes an anchor position, a growth direction (declared or inferred), and
//! a control's ordinal among siblings at the same anchor, and produces exact
//! pixel placement plus an equivalent declarative style. All computation is
//! pure, synchronous, and O(1) per control.

pub mod config;
pub mod coords;
pub mod engine;
pub mod error;
pub mod resolver;
pub mod spacing;
pub mod style;
pub mod types;

pub use config::LayoutConfig;
pub use engine::{compute, place, ControlPlacement, SceneLayout};
pub use error::LayoutError;
pub use resolver::{effective_direction, intelligent_direction, is_constrained};
pub use types::*;

/// Compute Levenshtein edit distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut dp = vec![vec![0usize; n + 1]; m + 1];

    for i in 0..=m {
        dp[i][0] = i;
    }
    for j in 0..=n {
        dp[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }

    dp[m][n]
}

/// Anchor names within a small edit distance of a misspelled one, closest
/// first
pub(crate) fn similar_positions(target: &str, max_distance: usize) -> Vec<String> {
    let mut candidates: Vec<(&'static str, usize)> = AnchorPosition::ALL
        .iter()
        .filter_map(|position| {
            let name = position.name();
            let dist = levenshtein_distance(name, target);
            if dist <= max_distance && dist > 0 {
                Some((name, dist))
            } else {
                None
            }
        })
        .collect();

    candidates.sort_by_key(|(_, d)| *d);
    candidates
        .into_iter()
        .map(|(name, _)| name.to_string())
        .take(3)
        .collect()
}
