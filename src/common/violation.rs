use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Violation categories the resolvers can report for one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    NoHelmet,
    TripleRiding,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::NoHelmet => "No Helmet",
            ViolationKind::TripleRiding => "Triple Riding",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict for one processed image. Built once by the pipeline and immutable
/// afterwards; the storage and web layers consume it as JSON.
///
/// An empty `violations` list is a normal result, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViolationResult {
    pub violations: Vec<ViolationKind>,
    pub plate_number: Option<String>,
    pub evidence_path: Option<PathBuf>,
}

impl ViolationResult {
    pub fn new(violations: Vec<ViolationKind>) -> Self {
        Self {
            violations,
            plate_number: None,
            evidence_path: None,
        }
    }

    pub fn with_plate(mut self, plate: String) -> Self {
        self.plate_number = Some(plate);
        self
    }

    pub fn with_evidence(mut self, path: PathBuf) -> Self {
        self.evidence_path = Some(path);
        self
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn has(&self, kind: ViolationKind) -> bool {
        self.violations.contains(&kind)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
