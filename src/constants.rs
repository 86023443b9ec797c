/// DOM hooks the frontend expects in `index.html`.
///
/// Keeping ids and class names here makes the contract with the static page
/// explicit and keeps string literals out of the wiring code.
// Buttons
pub const START_BTN_ID: &str = "start-btn";
pub const NEXT_BTN_ID: &str = "next-btn";
pub const YES_BTN_ID: &str = "yes-btn";
pub const NO_BTN_ID: &str = "no-btn";

// Containers
pub const CELEBRATION_ID: &str = "celebration";
pub const COLLAGE_CONTAINER_ID: &str = "bg-collage-container";
pub const PARTICLES_CONTAINER_ID: &str = "particles-container";
pub const BG_MUSIC_ID: &str = "bg-music";

// Selectors
pub const QUESTION_SELECTOR: &str = ".question";
pub const BUTTONS_SELECTOR: &str = ".buttons-container";
pub const CONTENT_WRAPPER_SELECTOR: &str = ".content-wrapper";

// Classes toggled on screens
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_HIDDEN: &str = "hidden";

// Classes toggled on <body> and the proposal card
pub const CLASS_SPOTLIGHT: &str = "spotlight-active";
pub const CLASS_CELEBRATING: &str = "celebrating";
pub const CLASS_EXPANDED: &str = "expanded";

// Classes of spawned decoration
pub const CLASS_PARTICLE: &str = "particle";
pub const CLASS_SPARKLE: &str = "sparkle";
pub const CLASS_BURST_PART: &str = "burst-part";
pub const CLASS_CONFETTI: &str = "confetti";
pub const CLASS_PHOTO_ITEM: &str = "bg-photo-item";
