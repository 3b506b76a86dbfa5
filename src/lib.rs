pub mod common;
pub mod data;
pub mod detectors;
pub mod evidence;
pub mod violations;

mod error;
mod pipeline;

pub use error::VioError;
pub use pipeline::{run_violation_worker, ViolationPipeline};

use crate::common::{ObjectClass, VioDetection, ViolationKind};
use crate::data::ResolverConfig;
use crate::violations::{
    has_helmet_violation, has_triple_riding_violation, suppress_duplicates,
};

pub type Result<T, E = VioError> = std::result::Result<T, E>;

/// Evaluates one image's worth of detections against both resolvers.
///
/// Pure core entry: partition by class, suppress duplicates per class, run
/// the helmet and rider-clustering resolvers, collect the triggered kinds.
/// Persons deliberately pass through unsuppressed; only riders, helmets and
/// motorcycles get deduplicated before resolution.
pub fn evaluate_detections(
    detections: &[VioDetection],
    config: &ResolverConfig,
) -> Vec<ViolationKind> {
    let mut riders = Vec::new();
    let mut helmets = Vec::new();
    let mut motorcycles = Vec::new();
    let mut persons = Vec::new();

    for detection in detections {
        if detection.confidence < config.min_confidence {
            continue;
        }
        match detection.class {
            ObjectClass::Rider => riders.push(detection.clone()),
            ObjectClass::Helmet => helmets.push(detection.clone()),
            ObjectClass::Motorcycle => motorcycles.push(detection.clone()),
            ObjectClass::Person => persons.push(detection.clone()),
            _ => {}
        }
    }

    let riders = suppress_duplicates(&riders, config.suppress_iou);
    let helmets = suppress_duplicates(&helmets, config.suppress_iou);
    let motorcycles = suppress_duplicates(&motorcycles, config.motorcycle_iou);

    // The resolvers read disjoint detection subsets and share no mutable state.
    let (no_helmet, triple_riding) = rayon::join(
        || has_helmet_violation(&riders, &helmets),
        || has_triple_riding_violation(&motorcycles, &persons, config),
    );

    let mut found = Vec::new();
    if no_helmet {
        found.push(ViolationKind::NoHelmet);
    }
    if triple_riding {
        found.push(ViolationKind::TripleRiding);
    }
    found
}
