//! Button pages defined in TOML.
//!
//! ```toml
//! name = "studio"
//!
//! [[buttons]]
//! row = 1
//! col = 1
//! title = ["HOME"]
//! background = "blue"
//!
//! [buttons.action]
//! kind = "function"
//! function = "home"
//! value = 0
//! ```

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::button::{BackgroundColor, Button, ButtonAction, ButtonStyle};
use crate::error::{PageError, Result};
use crate::page::{ButtonPage, GRID_COLS, GRID_ROWS, Position};

/// A page loaded from a configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PageConfig {
    /// Page name.
    pub name: String,
    /// Placed buttons; positions left out are empty.
    #[serde(default)]
    pub buttons: Vec<SlotConfig>,
}

/// One button placed on the grid.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SlotConfig {
    /// 1-based row, at most 4.
    pub row: u8,
    /// 1-based column, at most 8.
    pub col: u8,
    /// Title lines, top to bottom.
    pub title: Vec<String>,
    /// Background color tag.
    #[serde(default)]
    pub background: BackgroundColor,
    /// Action sent when the button is pressed.
    pub action: ButtonAction,
}

impl SlotConfig {
    pub fn new(position: Position, button: Button) -> Self {
        Self {
            row: position.row,
            col: position.col,
            title: button.style.title,
            background: button.style.background,
            action: button.action,
        }
    }

    pub fn to_button(&self) -> Button {
        Button::new(
            ButtonStyle {
                title: self.title.clone(),
                background: self.background,
            },
            self.action,
        )
    }
}

impl PageConfig {
    /// Parses and validates a page.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Parse`] for malformed TOML and the validation
    /// errors of [`PageConfig::validate`].
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        debug!(
            "loaded page {:?} with {} buttons",
            config.name,
            config.buttons.len()
        );
        Ok(config)
    }

    /// Snapshot of every button of `page`.
    pub fn from_page<P: ButtonPage + ?Sized>(page: &P) -> Self {
        Self {
            name: page.name().to_string(),
            buttons: page
                .buttons()
                .into_iter()
                .map(|(position, button)| SlotConfig::new(position, button))
                .collect(),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks that every button is on the grid, has a title and owns its
    /// position.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for slot in &self.buttons {
            let position = Position::new(slot.row, slot.col)?;
            if slot.title.iter().all(|line| line.trim().is_empty()) {
                return Err(PageError::EmptyTitle {
                    row: slot.row,
                    col: slot.col,
                });
            }
            if !seen.insert(position) {
                return Err(PageError::DuplicatePosition {
                    row: slot.row,
                    col: slot.col,
                });
            }
        }
        Ok(())
    }

    /// JSON Schema describing the page file format.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(PageConfig)
    }

    pub fn slot(&self, row: u8, col: u8) -> Option<&SlotConfig> {
        self.buttons
            .iter()
            .find(|slot| slot.row == row && slot.col == col)
    }

    /// Placed buttons and grid capacity.
    pub fn coverage(&self) -> (usize, usize) {
        (
            self.buttons.len(),
            usize::from(GRID_ROWS) * usize::from(GRID_COLS),
        )
    }
}

impl ButtonPage for PageConfig {
    fn name(&self) -> &str {
        &self.name
    }

    fn button(&self, row: u8, col: u8) -> Option<Button> {
        self.slot(row, col).map(SlotConfig::to_button)
    }
}
