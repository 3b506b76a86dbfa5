use serde::{Deserialize, Serialize};

use crate::common::{ObjectClass, VioBox};
use crate::violations::suppress::Suppress;

/// One detector output: class, box, confidence and an optional track identity
/// assigned by the cross-frame tracker. Detections are produced fresh per
/// image and never mutated downstream, only filtered and grouped.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VioDetection {
    pub class: ObjectClass,
    pub bbox: VioBox,
    pub confidence: f32,
    pub track_id: Option<u32>,
    pub label: Option<String>,
}

impl Suppress for VioDetection {
    /// Computes the intersection over union (IoU) between this detection's box and another's.
    fn iou(&self, other: &Self) -> f32 {
        self.bbox.iou(&other.bbox)
    }

    /// Returns the confidence score of the detection.
    fn confidence(&self) -> f32 {
        self.confidence
    }
}

impl VioDetection {
    /// The confidence is clamped into `[0, 1]`; the upstream detector is not
    /// trusted to stay in range.
    pub fn new(class: ObjectClass, bbox: VioBox, confidence: f32) -> Self {
        Self {
            class,
            bbox,
            confidence: clamp_confidence(confidence),
            track_id: None,
            label: None,
        }
    }

    /// Sets the track identity assigned by the tracker collaborator.
    pub fn with_track_id(mut self, track_id: u32) -> Self {
        self.track_id = Some(track_id);
        self
    }

    /// Sets the optional human-readable name of the detection.
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_confidence(mut self, conf: f32) -> Self {
        self.confidence = clamp_confidence(conf);
        self
    }

    pub fn get_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.class.label().to_string())
    }
}

fn clamp_confidence(conf: f32) -> f32 {
    if conf.is_finite() {
        conf.clamp(0., 1.)
    } else {
        0.
    }
}
