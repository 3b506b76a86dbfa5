use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::common::{ObjectClass, VioDetection, VioImage};

/// Base directory choices for saved evidence images.
///
/// Examples: `~/.local/share/vio_detect/output_images`,
/// `~/.cache/vio_detect/output_images`, `./vio_detect/output_images`.
#[derive(Debug, Clone)]
pub enum EvidenceRoot {
    Data,
    Cache,
    Current,
    Custom(PathBuf),
}

impl EvidenceRoot {
    fn resolve(&self) -> anyhow::Result<PathBuf> {
        let base = match self {
            EvidenceRoot::Data => dirs::data_local_dir(),
            EvidenceRoot::Cache => dirs::cache_dir(),
            EvidenceRoot::Current => std::env::current_dir().ok(),
            EvidenceRoot::Custom(path) => Some(path.clone()),
        };

        let mut path = base.ok_or_else(|| {
            anyhow::anyhow!("Unsupported operating system. Supported OS: Linux, MacOS, Windows.")
        })?;

        if !matches!(self, EvidenceRoot::Custom(_)) {
            path.push("vio_detect");
            path.push("output_images");
        }
        Ok(path)
    }
}

/// Writes one annotated copy per violating image, named
/// `processed_<stamp>_<source>`, so the storage layer can link verdicts back
/// to what was seen.
#[derive(Debug)]
pub struct EvidenceStore {
    dir: PathBuf,
}

impl EvidenceStore {
    /// Resolves the output directory, creating it if it does not exist.
    pub fn new(root: EvidenceRoot) -> anyhow::Result<Self> {
        let dir = root.resolve()?;
        if !dir.exists() {
            std::fs::create_dir_all(&dir)?;
        }
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Saves the image with every given detection drawn as a hollow box in
    /// its class colour. Returns the path written.
    pub fn save_annotated(
        &self,
        image: &VioImage,
        marked: &[VioDetection],
    ) -> anyhow::Result<PathBuf> {
        let mut canvas = image.image.clone();
        for detection in marked {
            draw_detection(&mut canvas, detection);
        }

        let source = image.source_name.as_deref().unwrap_or("frame.jpg");
        let path = self
            .dir
            .join(format!("processed_{}_{}", epoch_stamp(), source));
        canvas.save(&path)?;
        log::info!("evidence image saved to {}", path.display());
        Ok(path)
    }
}

fn epoch_stamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn draw_detection(canvas: &mut RgbImage, detection: &VioDetection) {
    let (x1, y1, x2, y2) = detection.bbox.as_x1y1_x2y2_i32();
    let w = (x2 - x1).max(1) as u32;
    let h = (y2 - y1).max(1) as u32;
    let rect = Rect::at(x1, y1).of_size(w, h);
    draw_hollow_rect_mut(canvas, rect, class_colour(detection.class));
}

fn class_colour(class: ObjectClass) -> Rgb<u8> {
    match class {
        ObjectClass::Person | ObjectClass::Rider => Rgb([128, 0, 128]), // purple
        ObjectClass::Helmet => Rgb([0, 255, 0]),                       // green
        c if c.is_vehicle() => Rgb([255, 0, 0]),                       // red
        _ => Rgb([0, 0, 255]),                                         // blue
    }
}
