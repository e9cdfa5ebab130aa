pub mod flash;
pub mod gallery;
pub mod gesture;
pub mod grid;
pub mod transform;

pub use flash::FlashState;
pub use gallery::{Gallery, GalleryImage, ImageHandle, ImageSource};
pub use gesture::{GestureIntent, GestureMode, GestureSession, Point};
pub use grid::GridOverlay;
pub use transform::{OverlayTransform, TransformState};
