//! # buttonpage
//!
//! Button pages for hardware camera control panels.
//!
//! A panel is a grid of [`GRID_ROWS`] x [`GRID_COLS`] buttons addressed by
//! 1-based `(row, col)` positions. A page answers "what does the button at
//! this position do" with a [`Button`]: a display style (title lines and a
//! background color) plus one of three closed actions.
//!
//! ## Features
//!
//! - **Closed action set**: camera state, camera view and panel functions
//! - **Built-in page**: [`CameraPage`] with one column per camera
//! - **TOML pages**: [`PageConfig`] loads, validates and exports pages
//!
//! ## Quick Start
//!
//! ```rust
//! use buttonpage::{ButtonAction, ButtonPage, CameraPage, FunctionAction};
//!
//! let page = CameraPage;
//! let home = page.button(1, 1).unwrap();
//! assert_eq!(home.style.title, vec!["HOME"]);
//! assert_eq!(
//!     home.action,
//!     ButtonAction::Function { function: FunctionAction::Home, value: 0 }
//! );
//!
//! assert!(page.button(5, 1).is_none());
//! ```
//!
//! ## Modules
//!
//! - [`button`] - Button style and action variants
//! - [`page`] - The page trait, grid positions and the built-in camera page
//! - [`config`] - Pages defined in TOML files

#[macro_use]
extern crate log;

pub mod button;
pub mod config;
pub mod page;

mod error;

pub use button::{BackgroundColor, Button, ButtonAction, ButtonStyle, FunctionAction};
pub use config::{PageConfig, SlotConfig};
pub use error::{PageError, Result};
pub use page::{ButtonPage, CameraPage, GRID_COLS, GRID_ROWS, Position};
