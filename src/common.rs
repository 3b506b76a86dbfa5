
mod object_class;
mod vio_box;
mod vio_detection;
mod vio_image;
mod violation;

pub use object_class::*;
pub use vio_box::*;
pub use vio_detection::*;
pub use vio_image::*;
pub use violation::*;
