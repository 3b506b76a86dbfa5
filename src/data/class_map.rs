use std::path::Path;

use crate::common::ObjectClass;

/// Maps raw detector class ids onto [`ObjectClass`].
///
/// Each detector carries its own map because the upstream models disagree on
/// id spaces: the helmet model only knows rider and helmet, the general model
/// uses the COCO ordering.
#[derive(Debug, Clone, Default)]
pub struct ClassMap {
    classes: Vec<ObjectClass>,
}

impl ClassMap {
    pub fn new(classes: Vec<ObjectClass>) -> Self {
        Self { classes }
    }

    /// Map for the dedicated helmet model: 0 = rider, 1 = helmet.
    pub fn helmet_model() -> Self {
        Self::new(vec![ObjectClass::Rider, ObjectClass::Helmet])
    }

    /// Map for COCO-trained general models, restricted to the street classes
    /// the resolvers consume.
    pub fn coco() -> Self {
        let mut classes: Vec<ObjectClass> =
            (0..80).map(|id| ObjectClass::Other(id as u16)).collect();
        classes[0] = ObjectClass::Person;
        classes[1] = ObjectClass::Bicycle;
        classes[2] = ObjectClass::Car;
        classes[3] = ObjectClass::Motorcycle;
        classes[5] = ObjectClass::Bus;
        classes[7] = ObjectClass::Truck;
        Self::new(classes)
    }

    /// Builds a map from a labels file, one class name per line. Names the
    /// resolvers don't know keep their raw id.
    pub fn from_labels_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let classes = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(id, label)| {
                ObjectClass::from_label(label).unwrap_or(ObjectClass::Other(id as u16))
            })
            .collect();
        Ok(Self { classes })
    }

    pub fn resolve(&self, class_id: usize) -> ObjectClass {
        self.classes
            .get(class_id)
            .copied()
            .unwrap_or(ObjectClass::Other(class_id as u16))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
