// Shared visual/interaction tuning constants used by both web and native front-ends.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

// Scene layout
pub const POINT_SPHERE_RADIUS: f32 = 80.0; // distance of every skill marker from the origin
pub const WIREFRAME_RADIUS: f32 = 70.0; // decorative wire shell sits inside the marker shell
pub const LABEL_RADIAL_FACTOR: f32 = 1.2; // labels float outside their marker along the same ray

// Visual sizing
pub const MARKER_RADIUS: f32 = 3.0; // world-space radius of a skill marker
pub const MARKER_HOVER_SCALE: f32 = 1.5; // hovered marker grows by this factor
pub const LABEL_SIZE: [f32; 2] = [30.0, 15.0]; // idle label quad, world units
pub const LABEL_HOVER_SIZE: [f32; 2] = [40.0, 20.0]; // hovered label quad, world units

// Camera
pub const CAMERA_DISTANCE: f32 = 200.0;
pub const CAMERA_FOVY_RADIANS: f32 = 75.0 * PI / 180.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Orbit interaction
pub const ORBIT_DAMPING: f32 = 0.05; // fraction of pending rotation applied per reference frame
pub const ORBIT_REFERENCE_FPS: f32 = 60.0; // damping and auto-rotate are normalized to this rate
pub const ORBIT_ROTATE_SPEED: f32 = 1.0; // full viewport-height drag equals one revolution
pub const AUTO_ROTATE_SPEED: f32 = 0.5;
pub const AUTO_ROTATE_STEP_RADIANS: f32 = TAU / 60.0 / 60.0 * AUTO_ROTATE_SPEED; // per reference frame
pub const PITCH_LIMIT_RADIANS: f32 = FRAC_PI_2 - 1e-3; // keep the eye off the poles
pub const ORBIT_MAX_STEP_FRAMES: f32 = 4.0; // cap catch-up after long frame gaps (background tabs)

// Picking
pub const PICK_SPHERE_RADIUS: f32 = MARKER_RADIUS; // hit-test against the idle marker size

// Wireframe tessellation
pub const WIRE_PARALLELS: u32 = 15;
pub const WIRE_MERIDIANS: u32 = 24;
pub const WIRE_ARC_STEPS: u32 = 64;

// Marker mesh tessellation
pub const MARKER_SECTORS: u32 = 16;
pub const MARKER_STACKS: u32 = 16;

// Label atlas tiles (pixels)
pub const ATLAS_TILE_WIDTH: u32 = 256;
pub const ATLAS_TILE_HEIGHT: u32 = 128;
pub const ATLAS_FONT: &str = "bold 28px Arial";

// Default label set shown when the host supplies none
pub const DEFAULT_SKILLS: [&str; 12] = [
    "React",
    "Next.js",
    "TypeScript",
    "Node.js",
    "UI/UX",
    "Product",
    "Design",
    "Strategy",
    "Business",
    "Analytics",
    "Marketing",
    "Leadership",
];
