use crate::common::{VioBox, VioDetection};
use crate::data::ResolverConfig;

/// The person detections associated with one motorcycle, sorted by
/// confidence descending. Built transiently per motorcycle and discarded
/// after classification.
#[derive(Debug, Clone)]
pub struct RiderCluster {
    pub motorcycle: VioDetection,
    pub members: Vec<(VioDetection, f32)>,
}

impl RiderCluster {
    pub fn count(&self) -> usize {
        self.members.len()
    }

    pub fn is_violation(&self, min_cluster_size: usize) -> bool {
        self.count() >= min_cluster_size
    }
}

/// Person center within `factor` times the larger motorcycle side of the
/// motorcycle center.
pub fn within_center_distance(person: &VioBox, motorcycle: &VioBox, factor: f32) -> bool {
    let threshold = factor * motorcycle.width().max(motorcycle.height());
    person.center_distance(motorcycle) < threshold
}

/// Vertical overlap ratio against the motorcycle above `ratio`.
pub fn shares_vertical_overlap(person: &VioBox, motorcycle: &VioBox, ratio: f32) -> bool {
    person.vertical_overlap_ratio(motorcycle) > ratio
}

/// Horizontal overlap ratio against the motorcycle above `ratio`.
pub fn shares_horizontal_overlap(person: &VioBox, motorcycle: &VioBox, ratio: f32) -> bool {
    person.horizontal_overlap_ratio(motorcycle) > ratio
}

/// Membership is the OR of the three criteria, each lenient on its own, so
/// that seated, leaning and standing pillion riders are all caught. The cost
/// is the occasional bystander counted as a rider.
pub fn is_cluster_member(person: &VioBox, motorcycle: &VioBox, config: &ResolverConfig) -> bool {
    within_center_distance(person, motorcycle, config.distance_factor)
        || shares_vertical_overlap(person, motorcycle, config.overlap_ratio)
        || shares_horizontal_overlap(person, motorcycle, config.overlap_ratio)
}

/// Builds the rider cluster for one motorcycle.
///
/// Persons are scanned top to bottom so the output order is deterministic;
/// membership itself is per-person and independent of the scan order.
pub fn cluster_for_motorcycle(
    motorcycle: &VioDetection,
    persons: &[VioDetection],
    config: &ResolverConfig,
) -> RiderCluster {
    let mut scan: Vec<&VioDetection> = persons.iter().collect();
    scan.sort_by(|a, b| a.bbox.y1.total_cmp(&b.bbox.y1));

    let mut members = Vec::new();
    for person in scan {
        let member = is_cluster_member(&person.bbox, &motorcycle.bbox, config);
        log::debug!(
            "person at {:?} vs motorcycle at {:?}: member={}",
            person.bbox.xy1_xy2(),
            motorcycle.bbox.xy1_xy2(),
            member
        );
        if member {
            members.push((person.clone(), person.confidence));
        }
    }
    members.sort_by(|a, b| b.1.total_cmp(&a.1));

    RiderCluster {
        motorcycle: motorcycle.clone(),
        members,
    }
}

/// True when any motorcycle carries at least `min_cluster_size` associated
/// persons. Motorcycles are judged independently, and a person may count
/// towards more than one motorcycle's cluster.
pub fn has_triple_riding_violation(
    motorcycles: &[VioDetection],
    persons: &[VioDetection],
    config: &ResolverConfig,
) -> bool {
    let mut found = false;
    for motorcycle in motorcycles {
        let cluster = cluster_for_motorcycle(motorcycle, persons, config);
        log::debug!(
            "motorcycle at {:?} carries {} associated person(s)",
            motorcycle.bbox.xy1_xy2(),
            cluster.count()
        );
        if cluster.is_violation(config.min_cluster_size) {
            found = true;
            break;
        }
    }
    found
}
