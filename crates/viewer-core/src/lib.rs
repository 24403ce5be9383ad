pub mod camera;
pub mod cloud;
pub mod config;
pub mod constants;
pub mod controller;
pub mod controls;
pub mod error;
pub mod layout;
pub mod load;
pub mod mesh;
pub mod overlay;
pub mod picking;
pub mod records;
pub mod scene;
pub mod transition;

pub use camera::*;
pub use cloud::*;
pub use config::*;
pub use constants::*;
pub use controller::*;
pub use controls::*;
pub use error::ViewerError;
pub use layout::*;
pub use load::*;
pub use overlay::*;
pub use picking::*;
pub use records::*;
pub use scene::*;
pub use transition::*;

// Shaders bundled as string constants
pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");
pub static MESH_WGSL: &str = include_str!("../shaders/mesh.wgsl");
pub static LINES_WGSL: &str = include_str!("../shaders/lines.wgsl");
