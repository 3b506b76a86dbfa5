use std::path::PathBuf;

use thiserror::Error;

/// Failures the pipeline can report.
///
/// Geometry and association never fail: malformed boxes from the untrusted
/// detector are clamped at construction instead of propagated.
#[derive(Error, Debug)]
pub enum VioError {
    /// The input image could not be decoded. Fatal for that image only.
    #[error("cannot read input image {}: {}", .path.display(), .source)]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The external detector failed. The image stays unprocessed; no partial
    /// violation result is produced.
    #[error("object detector unavailable: {0}")]
    DetectorUnavailable(String),

    /// The plate service failed. Non-fatal: violations already found are
    /// still reported with the plate left unset.
    #[error("plate recognition failed: {0}")]
    RecognitionFailed(String),
}
