// Central place for UI strings and other non-localized constants.
// Keep these out of gui.rs to reduce duplication and make tweaks safer.

// Flat-key format pieces: `controlStyles[N].target`, `controlStyles[N].styles[M]`.
pub const KEY_PREFIX: &str = "controlStyles[";
pub const KEY_TARGET_SUFFIX: &str = ".target";
pub const KEY_STYLES_INFIX: &str = ".styles[";

// Defaults for newly added entities.
pub const DEFAULT_TARGET_NAME: &str = "New Target";
pub const DEFAULT_STYLE_VALUE: &str = "NewStyle=Value";

// English UI strings (EN_ prefix to make future localization easier)
pub const EN_APP_TITLE: &str = "JSON Style Organizer";

pub const EN_HEADING_INPUT: &str = "Input JSON";
pub const EN_HEADING_EDITOR: &str = "Style Editor";
pub const EN_HEADING_OUTPUT: &str = "Generated JSON";

pub const EN_HINT_INPUT: &str = "Paste your flat JSON structure here. E.g., \
{\"controlStyles[0].target\":\"...\", \"controlStyles[0].styles[0]\":\"...\"}";
pub const EN_HINT_OUTPUT: &str = "Generated JSON will appear here...";
pub const EN_HINT_TARGET_NAME: &str = "Target Name";
pub const EN_HINT_STYLE_VALUE: &str = "Style Value";

pub const EN_BTN_LOAD: &str = "Load and Parse JSON";
pub const EN_BTN_GENERATE: &str = "Generate and Copy JSON";
pub const EN_BTN_ADD_TARGET: &str = "Add New Target";
pub const EN_BTN_ADD_STYLE: &str = "Add Style";
pub const EN_BTN_DUPLICATE_TARGET: &str = "Duplicate Target";
pub const EN_BTN_DELETE_TARGET: &str = "Delete Target";
pub const EN_BTN_DUPLICATE: &str = "Duplicate";
pub const EN_BTN_DELETE: &str = "Delete";
pub const EN_BTN_TOGGLE_THEME: &str = "Theme";
pub const EN_BTN_CLEAR: &str = "Clear";

pub const EN_GLYPH_DRAG_HANDLE: &str = "☰";

pub const EN_EDITOR_EMPTY: &str = "No targets. Load JSON or add a target.";

// Notices.
pub const EN_OK_LOADED: &str = "JSON loaded and parsed successfully!";
pub const EN_OK_GENERATED: &str = "JSON generated and copied to clipboard!";
pub const EN_ERR_PARSE_PREFIX: &str = "Failed to parse JSON:";
pub const EN_ERR_GENERATE_PREFIX: &str = "Failed to generate JSON or copy to clipboard:";
