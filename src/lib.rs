//! `termsurface` - rendering-support layer for terminal front ends
//!
//! Sits between a terminal-emulation engine (which owns the live screen,
//! cursor, and escape-sequence parsing) and a display surface that wants
//! to paint text efficiently. Provides the bounded scrollback ring, a
//! unified position resolver spanning history and live screen, and a
//! run-length style-merging encoder for redraw.

// Crate-level lint configuration
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow ScrollbackBuffer etc
#![allow(clippy::missing_errors_doc)] // Errors documented where non-obvious
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod cell;
pub mod color;
pub mod engine;
pub mod error;
pub mod input;
pub mod log;
pub mod resolve;
pub mod run;
pub mod scrollback;
pub mod session;
pub mod style;

// Re-export core types at crate root
pub use cell::Cell;
pub use color::{Color, Rgb};
pub use engine::{CursorPos, EngineEvents, Property, Rect, ScreenEngine};
pub use error::{Error, Result};
pub use input::{KeyCode, KeyModifiers, KeypadKey, MouseButton};
pub use log::{LogLevel, emit_log, set_log_callback};
pub use resolve::PositionResolver;
pub use run::{CellRun, RunEncoder, RunStyle};
pub use scrollback::{ScrollbackBuffer, ScrollbackLine};
pub use session::{ScanDirection, Session, SessionClient, SessionOptions};
pub use style::{CellAttributes, Style};
