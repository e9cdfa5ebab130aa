pub mod camera;
pub mod files;
pub mod projects;
pub mod storage;
pub mod template;

pub use camera::CameraSource;
