use std::path::Path;

use crate::common::{VioDetection, VioImage, ViolationResult};
use crate::data::{ResolverConfig, WorkerState};
use crate::detectors::{Detector, PlateRecognizer, Tracker};
use crate::evidence::EvidenceStore;
use crate::{evaluate_detections, Result};

/// Orchestrates one image's trip from raw detections to a violation verdict.
///
/// This is the only component that knows about the external collaborators.
/// The detector is required; tracker, plate recognizer and evidence store
/// are optional enrichments.
pub struct ViolationPipeline {
    detector: Box<dyn Detector>,
    tracker: Option<Box<dyn Tracker>>,
    plate_recognizer: Option<Box<dyn PlateRecognizer>>,
    evidence: Option<EvidenceStore>,
    config: ResolverConfig,
}

impl ViolationPipeline {
    pub fn new(detector: Box<dyn Detector>, config: ResolverConfig) -> Self {
        Self {
            detector,
            tracker: None,
            plate_recognizer: None,
            evidence: None,
            config,
        }
    }

    pub fn with_tracker(mut self, tracker: Box<dyn Tracker>) -> Self {
        self.tracker = Some(tracker);
        self
    }

    pub fn with_plate_recognizer(mut self, recognizer: Box<dyn PlateRecognizer>) -> Self {
        self.plate_recognizer = Some(recognizer);
        self
    }

    pub fn with_evidence_store(mut self, store: EvidenceStore) -> Self {
        self.evidence = Some(store);
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Full evaluation of one decoded image.
    ///
    /// An empty violation set is a normal `Ok` result. Plate recognition and
    /// evidence writing are best-effort: their failure never retracts
    /// violations that were already found.
    pub fn process_image(&mut self, image: &VioImage) -> Result<ViolationResult> {
        let mut detections = self.detector.detect(image)?;
        if let Some(tracker) = self.tracker.as_mut() {
            detections = tracker.update(detections);
        }
        log::info!(
            "{} detection(s) in {}",
            detections.len(),
            image.source_name.as_deref().unwrap_or("<memory>")
        );

        let violations = evaluate_detections(&detections, &self.config);
        let mut result = ViolationResult::new(violations);

        if result.is_clean() {
            log::info!("no violations detected");
            return Ok(result);
        }
        log::info!(
            "violations detected: {}",
            result
                .violations
                .iter()
                .map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        result = self.attach_evidence(result, image, &detections);
        result = self.attach_plate(result, image);
        Ok(result)
    }

    /// Decodes an image file and evaluates it.
    pub fn process_path(&mut self, path: &Path) -> Result<ViolationResult> {
        let image = VioImage::from_path(path)?;
        self.process_image(&image)
    }

    fn attach_evidence(
        &self,
        mut result: ViolationResult,
        image: &VioImage,
        detections: &[VioDetection],
    ) -> ViolationResult {
        let Some(store) = self.evidence.as_ref() else {
            return result;
        };

        let marked: Vec<VioDetection> = detections
            .iter()
            .filter(|d| d.confidence >= self.config.min_confidence)
            .cloned()
            .collect();
        match store.save_annotated(image, &marked) {
            Ok(path) => result = result.with_evidence(path),
            Err(err) => log::warn!("failed to save evidence image: {err}"),
        }
        result
    }

    fn attach_plate(&mut self, mut result: ViolationResult, image: &VioImage) -> ViolationResult {
        let Some(recognizer) = self.plate_recognizer.as_mut() else {
            return result;
        };

        match recognizer.recognize(image) {
            Ok(Some(read)) => {
                log::info!("detected plate {} (score {:.2})", read.text, read.score);
                result = result.with_plate(read.text);
            }
            Ok(None) => log::info!("no license plate found"),
            Err(err) => log::warn!("{err}"),
        }
        result
    }
}

/// Serves one pipeline over channels on the calling thread, the way a
/// long-lived detection worker runs. Exits when either channel side hangs up.
pub fn run_violation_worker(mut pipeline: ViolationPipeline, state: WorkerState) {
    loop {
        let image = match state.img_rx.recv() {
            Ok(image) => image,
            Err(_) => {
                log::info!("violation worker: submit side closed, exiting");
                break;
            }
        };

        let result = match pipeline.process_image(&image) {
            Ok(result) => result,
            Err(err) => {
                log::error!("violation worker: {err}");
                continue;
            }
        };

        if state.res_tx.send(Box::new(result)).is_err() {
            log::info!("violation worker: result side closed, exiting");
            break;
        }
    }
}
