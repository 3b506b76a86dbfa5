/// Overlap/confidence view a type must expose to take part in duplicate
/// suppression.
pub trait Suppress {
    fn iou(&self, other: &Self) -> f32;
    fn confidence(&self) -> f32;
}

/// Greedy highest-confidence-first duplicate suppression.
///
/// The upstream detector frequently reports several overlapping boxes for one
/// physical object. Candidates are taken in confidence order (ties keep their
/// input order); each accepted box discards every remaining candidate whose
/// IoU with it reaches `iou_threshold`.
///
/// The result is in acceptance order. The highest-confidence representative
/// of any cluster of mutually overlapping boxes always survives, and no two
/// survivors have an IoU at or above the threshold.
pub fn suppress_duplicates<T: Suppress + Clone>(candidates: &[T], iou_threshold: f32) -> Vec<T> {
    let mut remaining = candidates.to_vec();
    remaining.sort_by(|a, b| b.confidence().total_cmp(&a.confidence()));

    let mut accepted = Vec::new();
    while !remaining.is_empty() {
        let best = remaining.remove(0);
        remaining.retain(|other| {
            let iou = best.iou(other);
            if iou >= iou_threshold {
                log::debug!(
                    "suppressing duplicate: conf {:.2} overlaps kept conf {:.2} at iou {:.2}",
                    other.confidence(),
                    best.confidence(),
                    iou
                );
                false
            } else {
                true
            }
        });
        accepted.push(best);
    }

    accepted
}
