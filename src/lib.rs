pub mod config;
pub mod error;
pub mod grid;
pub mod keymap;
pub mod logging;
pub mod models;
pub mod tui;

pub use error::{PaletteError, Result};
pub use grid::{Cursor, GridOptions, GridSelector, LineFit, SelectorState};
pub use keymap::{Action, KeyMap};
pub use models::Item;
