pub mod atlas;
pub mod constants;
pub mod layout;
pub mod mesh;
pub mod orbit;
pub mod palette;
pub mod picking;
pub mod scene;
pub mod state;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static LABEL_WGSL: &str = include_str!("../shaders/label.wgsl");

pub use atlas::AtlasPlan;
pub use constants::*;
pub use layout::{label_anchor, sphere_points};
pub use mesh::{unit_sphere_mesh, wireframe_sphere};
pub use orbit::OrbitState;
pub use palette::{srgb_to_linear, Palette, Theme};
pub use picking::{ndc_from_css, nearest_hit, ray_sphere};
pub use scene::SkillSphere;
pub use state::Camera;
