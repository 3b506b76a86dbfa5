use serde::{Deserialize, Serialize};

/// Tunable thresholds for the association resolvers.
///
/// The defaults reproduce the deployed behavior: lenient gates that favor
/// catching every rider over rejecting bystanders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Detections below this confidence are ignored entirely.
    pub min_confidence: f32,
    /// IoU at or above which two same-class boxes count as one object.
    pub suppress_iou: f32,
    /// Suppression threshold for motorcycles, which the detector splits into
    /// overlapping boxes more often than other classes.
    pub motorcycle_iou: f32,
    /// Rider-cluster distance gate, in multiples of the larger motorcycle side.
    pub distance_factor: f32,
    /// Minimum directional overlap ratio for rider-cluster membership.
    pub overlap_ratio: f32,
    /// Cluster size at which a motorcycle is flagged for triple riding.
    pub min_cluster_size: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.25,
            suppress_iou: 0.4,
            motorcycle_iou: 0.3,
            distance_factor: 2.0,
            overlap_ratio: 0.1,
            min_cluster_size: 3,
        }
    }
}

impl ResolverConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_min_confidence(mut self, x: f32) -> Self {
        self.min_confidence = x;
        self
    }

    pub fn with_suppress_iou(mut self, x: f32) -> Self {
        self.suppress_iou = x;
        self
    }

    pub fn with_motorcycle_iou(mut self, x: f32) -> Self {
        self.motorcycle_iou = x;
        self
    }

    pub fn with_distance_factor(mut self, x: f32) -> Self {
        self.distance_factor = x;
        self
    }

    pub fn with_overlap_ratio(mut self, x: f32) -> Self {
        self.overlap_ratio = x;
        self
    }

    pub fn with_min_cluster_size(mut self, n: usize) -> Self {
        self.min_cluster_size = n;
        self
    }
}
