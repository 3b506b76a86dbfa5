use crate::common::{VioBox, VioDetection};

/// Head region used for helmet association: the top half of the rider box,
/// full width.
pub fn head_region(rider: &VioDetection) -> VioBox {
    rider.bbox.top_half()
}

/// A helmet covers a head region on any positive overlap. No IoU or ratio
/// threshold; a grazing overlap still counts.
pub fn helmet_covers(helmet: &VioDetection, head: &VioBox) -> bool {
    helmet.bbox.intersect(head) > 0.
}

/// True when at least one helmet overlaps the rider's head region. Helmets
/// are checked in input order and the scan stops at the first match.
pub fn rider_is_helmeted(rider: &VioDetection, helmets: &[VioDetection]) -> bool {
    let head = head_region(rider);
    helmets.iter().any(|helmet| helmet_covers(helmet, &head))
}

/// One unhelmeted rider anywhere in the image flags the whole image, so the
/// scan stops at the first such rider. No riders means no violation.
pub fn has_helmet_violation(riders: &[VioDetection], helmets: &[VioDetection]) -> bool {
    for rider in riders {
        let helmeted = rider_is_helmeted(rider, helmets);
        log::debug!(
            "rider at {:?}: helmeted={}",
            rider.bbox.xy1_xy2(),
            helmeted
        );
        if !helmeted {
            return true;
        }
    }
    false
}
