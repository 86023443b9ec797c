/// Tuning constants shared by the pure core and the web frontend.
///
/// Distances are CSS pixels unless the name says otherwise; forces are pixels
/// per animation frame.
// Evasive button: cursor repulsion
pub const CURSOR_REPEL_RADIUS_PX: f32 = 150.0;
pub const CURSOR_PUSH_STRENGTH: f32 = 15.0;

// Evasive button: viewport edge repulsion
pub const EDGE_THRESHOLD_PX: f32 = 100.0;
pub const EDGE_PUSH_STRENGTH: f32 = 10.0;

// Page transitions
pub const PAGE_FADE_MS: i32 = 800;

// Background collage
pub const COLLAGE_COLS: usize = 4;
pub const COLLAGE_ROWS: usize = 3;
pub const COLLAGE_DISTINCT_PHOTOS: usize = 6;
pub const COLLAGE_REPEATS: usize = 2; // repeated for density
pub const COLLAGE_MAX_PHOTOS: usize = COLLAGE_COLS * COLLAGE_ROWS;
pub const COLLAGE_CELL_MARGIN: f32 = 10.0; // keeps jitter away from the next cell (vw/vh)
pub const PHOTO_WIDTH_MIN_PX: f32 = 200.0;
pub const PHOTO_WIDTH_SPAN_PX: f32 = 150.0;
pub const PHOTO_ASPECT_MIN: f32 = 0.8;
pub const PHOTO_ASPECT_SPAN: f32 = 0.4;
pub const PHOTO_TILT_DEG: f32 = 15.0;
pub const PHOTO_DRIFT_PX: f32 = 100.0;
pub const PHOTO_DRIFT_MIN_MS: f64 = 25_000.0;
pub const PHOTO_DRIFT_SPAN_MS: f64 = 10_000.0;

// Floating background particles
pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_MAX_COUNT: usize = 200;
pub const PARTICLE_SIZE_MIN_PX: f32 = 10.0;
pub const PARTICLE_SIZE_SPAN_PX: f32 = 20.0;
pub const PARTICLE_DURATION_MIN_S: f32 = 10.0;
pub const PARTICLE_DURATION_SPAN_S: f32 = 10.0;
pub const PARTICLE_DELAY_MAX_S: f32 = 5.0;

// Pointer sparkle trail and click bursts
pub const SPARKLE_INTERVAL_MS: f64 = 30.0;
pub const SPARKLE_LIFETIME_MS: i32 = 1000;
pub const BURST_PARTS: usize = 8;
pub const BURST_LIFETIME_MS: i32 = 800;

// Celebration confetti
pub const CONFETTI_PER_VOLLEY: usize = 30;
pub const CONFETTI_INTERVAL_MS: i32 = 200;
pub const CONFETTI_DURATION_MS: f64 = 1500.0;
pub const CONFETTI_SIZE_PX: f32 = 10.0;
pub const CONFETTI_VELOCITY_MIN: f32 = 100.0;
pub const CONFETTI_VELOCITY_SPAN: f32 = 300.0;

// Upper bound on short-lived effect nodes alive at once
pub const MAX_LIVE_EFFECT_NODES: usize = 600;

// Background music
pub const MUSIC_VOLUME: f64 = 0.5;

pub const PARTICLE_COLORS: [&str; 5] = ["#ff4d6d", "#ff8fa3", "#ffb3c1", "#fff0f3", "#e01e37"];
pub const SPARKLE_COLORS: [&str; 3] = ["#ff4d6d", "#ff8fa3", "#ffb3c1"];
pub const CONFETTI_COLORS: [&str; 3] = ["#ff4d6d", "#ff8fa3", "#ffb3c1"];

pub const HEART_CLIP_PATH: &str = "path('M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z')";
