pub mod anchors;
pub mod bounds;
pub mod camera;
pub mod config;
pub mod constants;
pub mod health;
pub mod projector;
pub mod scene;

pub use anchors::*;
pub use bounds::*;
pub use camera::*;
pub use config::*;
pub use health::*;
pub use projector::*;
pub use scene::*;
