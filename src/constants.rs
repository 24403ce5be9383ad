// DOM hooks and pointer tuning for the browser front-end

// Canvas created inside the configured container
pub const CANVAS_ID: &str = "viewer-canvas";
pub const CANVAS_STYLE: &str = "display:block;width:100vw;height:100vh;touch-action:none";

// Optional `<script type="application/json">` element with page configuration
pub const CONFIG_ELEMENT_ID: &str = "viewer-config";
pub const QUERY_OVERRIDE_KEYS: [&str; 3] = ["cloud", "cameras", "images"];

// A press that travels further than this (CSS px) is an orbit drag, not a click
pub const CLICK_DRAG_TOLERANCE_PX: f32 = 4.0;

// PointerEvent.button values
pub const BUTTON_PRIMARY: i16 = 0;
pub const BUTTON_SECONDARY: i16 = 2;

// WheelEvent.deltaMode scaling to pixels
pub const WHEEL_LINE_PX: f32 = 16.0;
pub const WHEEL_PAGE_PX: f32 = 800.0;

// Initial marker instance buffer size (sphere + cone per camera); grows on demand
pub const MARKER_INSTANCE_CAPACITY: usize = 64;
