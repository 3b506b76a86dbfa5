use serde::{Deserialize, Serialize};

/// Semantic class of one detection.
///
/// Two upstream models feed the resolvers: the dedicated helmet model reports
/// `Rider`/`Helmet`, the general model reports the COCO street classes.
/// Anything the resolvers don't consume is kept as `Other` with its raw id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectClass {
    Rider,
    Helmet,
    Person,
    Motorcycle,
    Car,
    Bus,
    Truck,
    Bicycle,
    Other(u16),
}

impl Default for ObjectClass {
    fn default() -> Self {
        ObjectClass::Other(0)
    }
}

impl ObjectClass {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "rider" => Some(ObjectClass::Rider),
            "helmet" => Some(ObjectClass::Helmet),
            "person" => Some(ObjectClass::Person),
            "motorcycle" | "motorbike" => Some(ObjectClass::Motorcycle),
            "car" => Some(ObjectClass::Car),
            "bus" => Some(ObjectClass::Bus),
            "truck" => Some(ObjectClass::Truck),
            "bicycle" => Some(ObjectClass::Bicycle),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ObjectClass::Rider => "rider",
            ObjectClass::Helmet => "helmet",
            ObjectClass::Person => "person",
            ObjectClass::Motorcycle => "motorcycle",
            ObjectClass::Car => "car",
            ObjectClass::Bus => "bus",
            ObjectClass::Truck => "truck",
            ObjectClass::Bicycle => "bicycle",
            ObjectClass::Other(_) => "unknown",
        }
    }

    /// Vehicle classes of interest on the evidence output.
    pub fn is_vehicle(&self) -> bool {
        matches!(
            self,
            ObjectClass::Car
                | ObjectClass::Motorcycle
                | ObjectClass::Bus
                | ObjectClass::Truck
                | ObjectClass::Bicycle
        )
    }
}
