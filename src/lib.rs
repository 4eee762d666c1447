//! Core library for the JSON Style Organizer.
//! Decodes the flat `controlStyles[N]...` JSON object into an ordered tree of targets and
//! styles, edits and reorders that tree, and encodes it back into the same flat shape.

pub mod codec;
mod config;
mod error;
mod gui;
mod id;
mod model;
pub mod reorder;
mod session;
pub mod statics;

pub use codec::{FlatMap, decode, decode_str, encode, encode_pretty};
pub use config::EditorConfig;
pub use error::{EditorError, Result};
pub use gui::run_gui;
pub use id::Id;
pub use model::{Document, Style, Target};
pub use reorder::{DragItem, DropIndicator, DropPlacement, Gesture};
pub use session::{Clipboard, NoClipboard, Notice, Session};
