use std::path::Path;
use std::time::Duration;

use image::RgbImage;
use vio_detect::common::{
    ObjectClass, VioBox, VioDetection, VioImage, ViolationKind, ViolationResult,
};
use vio_detect::data::{worker_channels, ResolverConfig};
use vio_detect::detectors::{Detector, PlateRead, PlateRecognizer, Tracker, ViolationSink};
use vio_detect::evidence::{EvidenceRoot, EvidenceStore};
use vio_detect::{evaluate_detections, run_violation_worker, VioError, ViolationPipeline};

fn det(class: ObjectClass, x1: f32, y1: f32, x2: f32, y2: f32, conf: f32) -> VioDetection {
    VioDetection::new(class, VioBox::new(x1, y1, x2, y2), conf)
}

fn unhelmeted_rider_scene() -> Vec<VioDetection> {
    vec![det(ObjectClass::Rider, 100., 100., 200., 300., 0.9)]
}

fn blank_image() -> VioImage {
    VioImage::new(RgbImage::new(640, 480))
}

struct ScriptedDetector {
    detections: Vec<VioDetection>,
    fail: bool,
}

impl Detector for ScriptedDetector {
    fn detect(&mut self, _image: &VioImage) -> vio_detect::Result<Vec<VioDetection>> {
        if self.fail {
            return Err(VioError::DetectorUnavailable("scripted outage".to_string()));
        }
        Ok(self.detections.clone())
    }
}

enum PlateScript {
    Found(&'static str),
    NotFound,
    Broken,
}

struct ScriptedPlateReader {
    script: PlateScript,
}

impl PlateRecognizer for ScriptedPlateReader {
    fn recognize(&mut self, _image: &VioImage) -> vio_detect::Result<Option<PlateRead>> {
        match self.script {
            PlateScript::Found(raw) => Ok(PlateRead::parse(raw, 0.92)),
            PlateScript::NotFound => Ok(None),
            PlateScript::Broken => Err(VioError::RecognitionFailed("api timeout".to_string())),
        }
    }
}

/// Recognizer that must never be consulted; clean images skip plate lookup.
struct PanickingPlateReader;

impl PlateRecognizer for PanickingPlateReader {
    fn recognize(&mut self, _image: &VioImage) -> vio_detect::Result<Option<PlateRead>> {
        panic!("plate recognizer must not run for a clean image");
    }
}

struct SequentialTracker {
    next_id: u32,
}

impl Tracker for SequentialTracker {
    fn update(&mut self, detections: Vec<VioDetection>) -> Vec<VioDetection> {
        detections
            .into_iter()
            .map(|d| {
                let id = self.next_id;
                self.next_id += 1;
                d.with_track_id(id)
            })
            .collect()
    }
}

#[derive(Default)]
struct MemorySink {
    records: Vec<ViolationResult>,
}

impl ViolationSink for MemorySink {
    fn record(&mut self, result: &ViolationResult) -> anyhow::Result<()> {
        self.records.push(result.clone());
        Ok(())
    }
}

#[test]
fn zero_detections_is_a_clean_result() {
    let detector = ScriptedDetector {
        detections: vec![],
        fail: false,
    };
    let mut pipeline = ViolationPipeline::new(Box::new(detector), ResolverConfig::default())
        .with_plate_recognizer(Box::new(PanickingPlateReader));

    let result = pipeline.process_image(&blank_image()).unwrap();
    assert!(result.is_clean());
    assert_eq!(result.plate_number, None);
    assert_eq!(result.evidence_path, None);
}

#[test]
fn helmet_violation_gets_the_plate_attached() {
    let detector = ScriptedDetector {
        detections: unhelmeted_rider_scene(),
        fail: false,
    };
    let recognizer = ScriptedPlateReader {
        script: PlateScript::Found("ka 01 ab-1234"),
    };
    let mut pipeline = ViolationPipeline::new(Box::new(detector), ResolverConfig::default())
        .with_plate_recognizer(Box::new(recognizer));

    let result = pipeline.process_image(&blank_image()).unwrap();
    assert!(result.has(ViolationKind::NoHelmet));
    assert_eq!(result.plate_number.as_deref(), Some("KA01AB1234"));
}

#[test]
fn recognition_failure_keeps_the_violations() {
    let detector = ScriptedDetector {
        detections: unhelmeted_rider_scene(),
        fail: false,
    };
    let recognizer = ScriptedPlateReader {
        script: PlateScript::Broken,
    };
    let mut pipeline = ViolationPipeline::new(Box::new(detector), ResolverConfig::default())
        .with_plate_recognizer(Box::new(recognizer));

    let result = pipeline.process_image(&blank_image()).unwrap();
    assert!(result.has(ViolationKind::NoHelmet));
    assert_eq!(result.plate_number, None);
}

#[test]
fn missing_plate_is_a_normal_result() {
    let detector = ScriptedDetector {
        detections: unhelmeted_rider_scene(),
        fail: false,
    };
    let recognizer = ScriptedPlateReader {
        script: PlateScript::NotFound,
    };
    let mut pipeline = ViolationPipeline::new(Box::new(detector), ResolverConfig::default())
        .with_plate_recognizer(Box::new(recognizer));

    let result = pipeline.process_image(&blank_image()).unwrap();
    assert!(result.has(ViolationKind::NoHelmet));
    assert_eq!(result.plate_number, None);
}

#[test]
fn detector_outage_reports_no_partial_result() {
    let detector = ScriptedDetector {
        detections: vec![],
        fail: true,
    };
    let mut pipeline = ViolationPipeline::new(Box::new(detector), ResolverConfig::default());

    let err = pipeline.process_image(&blank_image()).unwrap_err();
    assert!(matches!(err, VioError::DetectorUnavailable(_)));
}

#[test]
fn unreadable_input_is_reported_distinctly() {
    let detector = ScriptedDetector {
        detections: vec![],
        fail: false,
    };
    let mut pipeline = ViolationPipeline::new(Box::new(detector), ResolverConfig::default());

    let err = pipeline
        .process_path(Path::new("/nonexistent/vio_detect_missing.jpg"))
        .unwrap_err();
    assert!(matches!(err, VioError::InputUnreadable { .. }));
}

#[test]
fn tracker_identities_do_not_change_the_verdict() {
    let detector = ScriptedDetector {
        detections: unhelmeted_rider_scene(),
        fail: false,
    };
    let mut pipeline = ViolationPipeline::new(Box::new(detector), ResolverConfig::default())
        .with_tracker(Box::new(SequentialTracker { next_id: 1 }));

    let result = pipeline.process_image(&blank_image()).unwrap();
    assert_eq!(result.violations, vec![ViolationKind::NoHelmet]);
}

#[test]
fn both_resolvers_can_fire_for_one_image() {
    let mut detections = unhelmeted_rider_scene();
    detections.push(det(ObjectClass::Motorcycle, 100., 100., 300., 400., 0.85));
    detections.push(det(ObjectClass::Person, 120., 80., 200., 260., 0.9));
    detections.push(det(ObjectClass::Person, 180., 120., 260., 300., 0.8));
    detections.push(det(ObjectClass::Person, 140., 200., 240., 380., 0.7));
    // Unrelated classes are ignored by both resolvers.
    detections.push(det(ObjectClass::Car, 500., 100., 620., 200., 0.95));

    let violations = evaluate_detections(&detections, &ResolverConfig::default());
    assert_eq!(
        violations,
        vec![ViolationKind::NoHelmet, ViolationKind::TripleRiding]
    );
}

#[test]
fn low_confidence_detections_are_ignored() {
    let detections = vec![det(ObjectClass::Rider, 100., 100., 200., 300., 0.1)];
    let violations = evaluate_detections(&detections, &ResolverConfig::default());
    assert!(violations.is_empty());
}

#[test]
fn worker_round_trip() {
    let detector = ScriptedDetector {
        detections: unhelmeted_rider_scene(),
        fail: false,
    };
    let pipeline = ViolationPipeline::new(Box::new(detector), ResolverConfig::default());

    let (submit, worker) = worker_channels();
    let handle = std::thread::spawn(move || run_violation_worker(pipeline, worker));

    submit.img_tx.send(Box::new(blank_image())).unwrap();
    let result = submit
        .res_rx
        .recv_timeout(Duration::from_secs(10))
        .unwrap();
    assert!(result.has(ViolationKind::NoHelmet));

    drop(submit);
    handle.join().unwrap();
}

#[test]
fn sink_records_what_it_is_given() {
    let mut sink = MemorySink::default();
    let result = ViolationResult::new(vec![ViolationKind::TripleRiding])
        .with_plate("MH12DE1433".to_string());

    sink.record(&result).unwrap();
    assert_eq!(sink.records.len(), 1);
    assert_eq!(sink.records[0], result);
}

#[test]
fn violation_result_round_trips_through_json() {
    let result = ViolationResult::new(vec![ViolationKind::NoHelmet, ViolationKind::TripleRiding])
        .with_plate("KA01AB1234".to_string());

    let json = result.to_json().unwrap();
    let back: ViolationResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn violation_kinds_use_the_reporting_strings() {
    assert_eq!(ViolationKind::NoHelmet.as_str(), "No Helmet");
    assert_eq!(ViolationKind::TripleRiding.as_str(), "Triple Riding");
}

#[test]
fn plate_parse_normalizes_and_validates() {
    let read = PlateRead::parse("ka 01 ab-1234", 0.92).unwrap();
    assert_eq!(read.text, "KA01AB1234");
    assert!((read.score - 0.92).abs() < 1e-6);

    assert!(PlateRead::parse("??", 0.5).is_none());
    assert!(PlateRead::parse("ab", 0.5).is_none());
    assert!(PlateRead::parse("", 0.5).is_none());
}

#[test]
fn evidence_store_writes_an_annotated_copy() {
    let dir = std::env::temp_dir().join(format!("vio_detect_test_{}", std::process::id()));
    let store = EvidenceStore::new(EvidenceRoot::Custom(dir.clone())).unwrap();

    let image = blank_image().with_source_name("scene.png");
    let marked = vec![det(ObjectClass::Motorcycle, 100., 100., 300., 400., 0.85)];

    let path = store.save_annotated(&image, &marked).unwrap();
    assert!(path.exists());
    assert!(path
        .file_name()
        .unwrap()
        .to_string_lossy()
        .ends_with("scene.png"));

    std::fs::remove_dir_all(&dir).unwrap();
}
