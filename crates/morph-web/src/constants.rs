// DOM hooks expected on the host page
pub const CANVAS_ID: &str = "glCanvas";
pub const MORPH_BUTTON_ID: &str = "morphBtn";
pub const RESET_BUTTON_ID: &str = "resetBtn";

// Canvas attributes read as config overrides, e.g. `data-particle-count`
pub const CONFIG_ATTR_PREFIX: &str = "data-";
