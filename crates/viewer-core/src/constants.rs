use glam::Vec3;

// Shared viewer tuning constants used by the web front-end and tools.

// Default camera
pub const DEFAULT_FOV_DEG: f32 = 75.0;
pub const DEFAULT_NEAR: f32 = 0.01;
pub const DEFAULT_FAR: f32 = 100.0;
pub const DEFAULT_EYE: Vec3 = Vec3::new(2.0, 2.0, 2.0);

// Framing a loaded cloud
pub const FIT_OFFSET: f32 = 2.2; // margin applied to the bounding radius
pub const MIN_FRAMING_RADIUS: f32 = 0.5;
pub const MIN_NEAR: f32 = 0.01;
pub const NEAR_RADIUS_DIVISOR: f32 = 100.0;
pub const FAR_DISTANCE_FACTOR: f32 = 4.0;
pub const FAR_RADIUS_FACTOR: f32 = 10.0;

// Point sizing (world units)
pub const POINT_SIZE_PER_RADIUS: f32 = 0.0025;
pub const POINT_SIZE_MIN: f32 = 0.002;
pub const POINT_SIZE_MAX: f32 = 0.02;
pub const DEFAULT_POINT_COLOR: [f32; 3] = [0.8, 0.8, 0.8];
pub const DEFAULT_CLOUD_RADIUS: f32 = 1.0;

// Grid / axes helpers
pub const GRID_SIZE: f32 = 2.0;
pub const GRID_DIVISIONS: u32 = 20;
pub const GRID_CENTER_COLOR: [f32; 3] = [0.267, 0.267, 0.267]; // 0x444444
pub const GRID_LINE_COLOR: [f32; 3] = [0.133, 0.133, 0.133]; // 0x222222
pub const GRID_DROP_FACTOR: f32 = 0.5; // grid sits this many radii below the center
pub const GRID_SCALE_FACTOR: f32 = 0.6;
pub const AXES_LENGTH: f32 = 1.0;
pub const AXES_SCALE_FACTOR: f32 = 0.25;

// Camera markers
pub const MARKER_SPHERE_RADIUS: f32 = 0.02;
pub const MARKER_SPHERE_SEGMENTS: u32 = 16;
pub const MARKER_CONE_RADIUS: f32 = 0.01;
pub const MARKER_CONE_HEIGHT: f32 = 0.03;
pub const MARKER_CONE_SEGMENTS: u32 = 8;
pub const MARKER_CONE_OFFSET: f32 = 0.025; // distance from sphere center along the view axis
pub const MARKER_COLOR: [f32; 3] = [0.0, 1.0, 0.0];
pub const MARKER_CONE_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
pub const MARKER_INTENSITY_SELECTED: f32 = 1.0;
pub const MARKER_INTENSITY_IDLE: f32 = 0.5;

// Transitions and overlay
pub const TRANSITION_MS: f64 = 1500.0;
pub const OVERLAY_HIDE_MS: i32 = 3000;
pub const LOOK_FORWARD: Vec3 = Vec3::NEG_Z; // camera-local view axis

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_PAN_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SCALE: f32 = 0.95; // per wheel notch
pub const ORBIT_POLAR_EPS: f32 = 1e-6;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.6;
pub const DIRECTIONAL_INTENSITY: f32 = 0.4;
pub const LIGHT_POSITION: Vec3 = Vec3::new(5.0, 5.0, 5.0);
pub const BACKGROUND_COLOR: [f32; 3] = [0.102, 0.102, 0.102]; // 0x1a1a1a

// Loading indicator text
pub const LOADING_TEXT: &str = "Loading point cloud...";
pub const PARSING_TEXT: &str = "Parsing point cloud...";
pub const FALLBACK_TEXT: &str = "Fallback loader starting...";
pub const LOAD_ERROR_TEXT: &str = "Error loading point cloud. Please check console.";
