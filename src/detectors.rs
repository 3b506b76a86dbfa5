use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::common::{VioDetection, VioImage, ViolationResult};
use crate::Result;

/// Object detector collaborator.
///
/// The model is loaded once by the implementation and reused across calls;
/// the pipeline only ever sees this trait. Detection must be deterministic
/// for identical image bytes and configuration.
pub trait Detector: Send {
    /// Runs detection over one image. Zero detections is a normal result;
    /// a broken detector reports [`crate::VioError::DetectorUnavailable`]
    /// instead.
    fn detect(&mut self, image: &VioImage) -> Result<Vec<VioDetection>>;
}

/// Cross-frame tracker collaborator, stateful across the frames of one
/// session. Single-image evaluation treats the assigned identities as unused
/// metadata.
pub trait Tracker: Send {
    fn update(&mut self, detections: Vec<VioDetection>) -> Vec<VioDetection>;
}

/// A normalized plate read returned by the recognition collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateRead {
    pub text: String,
    pub score: f32,
}

impl PlateRead {
    /// Normalizes a raw reader string: uppercased, separators stripped.
    /// Returns `None` when what remains is not a plausible plate.
    pub fn parse(raw: &str, score: f32) -> Option<Self> {
        let text: String = raw
            .trim()
            .to_uppercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '.'))
            .collect();
        let re = Regex::new(r"^[A-Z0-9]{4,12}$").unwrap();
        if re.is_match(&text) {
            Some(Self { text, score })
        } else {
            None
        }
    }
}

/// License-plate recognition collaborator.
///
/// `Ok(None)` is the normal "no plate found" result. Transport or auth
/// failures surface as [`crate::VioError::RecognitionFailed`] and never
/// retract violations that were already found.
pub trait PlateRecognizer: Send {
    fn recognize(&mut self, image: &VioImage) -> Result<Option<PlateRead>>;
}

/// Persistence collaborator for the storage layer. The core only ever
/// writes; it never reads a result back.
pub trait ViolationSink {
    fn record(&mut self, result: &ViolationResult) -> anyhow::Result<()>;
}
