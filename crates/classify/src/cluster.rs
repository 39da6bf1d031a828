//! Greedy near-duplicate clustering of headlines.
//!
//! Trend strength for an event is the size of the headline cluster it
//! falls into: three outlets reporting the same flood produce a cluster
//! of three.

use std::collections::HashMap;

/// Minimum token-set similarity for two headlines to share a cluster.
pub const CLUSTER_THRESHOLD: u32 = 75;

/// Group headlines into clusters of near-duplicates, returned as index
/// lists into `headlines`.
///
/// Clustering is greedy single-link: each unassigned headline seeds a new
/// cluster and pulls in every later unassigned headline similar enough to
/// the seed. Two headlines that are both similar to the seed join the same
/// cluster even when they are dissimilar to each other, and the outcome
/// depends on input order.
pub fn cluster_headlines(headlines: &[String]) -> Vec<Vec<usize>> {
    let mut clusters = Vec::new();
    let mut used = vec![false; headlines.len()];

    for i in 0..headlines.len() {
        if used[i] {
            continue;
        }
        let mut cluster = vec![i];
        used[i] = true;
        for j in 0..headlines.len() {
            if used[j] {
                continue;
            }
            if textsim::token_set_ratio(&headlines[i], &headlines[j]) >= CLUSTER_THRESHOLD {
                cluster.push(j);
                used[j] = true;
            }
        }
        clusters.push(cluster);
    }
    clusters
}

/// Cluster size keyed by headline text. Duplicate headlines share one key,
/// so they report the size of the last cluster containing that text.
pub fn cluster_sizes(headlines: &[String]) -> HashMap<String, usize> {
    let mut sizes = HashMap::new();
    for cluster in cluster_headlines(headlines) {
        for &idx in &cluster {
            sizes.insert(headlines[idx].clone(), cluster.len());
        }
    }
    sizes
}
