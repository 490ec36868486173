//! Button style and action variants.
//!
//! Every button on a page carries a [`ButtonStyle`] describing how the panel
//! draws it and a [`ButtonAction`] describing what a press sends to the
//! camera controller.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Background color tag understood by the panel firmware.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundColor {
    #[default]
    Black,
    Gray,
    White,
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
}

impl BackgroundColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Gray => "gray",
            Self::White => "white",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Purple => "purple",
        }
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a button is drawn.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
pub struct ButtonStyle {
    /// Title lines, top to bottom.
    pub title: Vec<String>,
    /// Background color tag.
    #[serde(default)]
    pub background: BackgroundColor,
}

impl ButtonStyle {
    pub fn new<I, S>(title: I, background: BackgroundColor) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into_iter().map(Into::into).collect(),
            background,
        }
    }
}

/// Panel-level functions that are not tied to a single camera.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FunctionAction {
    Home,
    ViewsActive,
    Zoom,
    Autofocus,
    Record,
    Tally,
    Brightness,
}

impl FunctionAction {
    /// Action name sent to the controller.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::ViewsActive => "views_active",
            Self::Zoom => "zoom",
            Self::Autofocus => "autofocus",
            Self::Record => "record",
            Self::Tally => "tally",
            Self::Brightness => "brightness",
        }
    }
}

impl fmt::Display for FunctionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a press sends to the camera controller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ButtonAction {
    /// Select a camera as the active one.
    CameraState { camera: u8 },
    /// Recall a stored view of a camera.
    CameraView {
        camera: u8,
        view_type: u8,
        index: u8,
    },
    /// Trigger a panel function with an argument.
    Function {
        function: FunctionAction,
        value: i32,
    },
}

impl ButtonAction {
    /// Camera this action targets, if any.
    pub fn camera(&self) -> Option<u8> {
        match self {
            Self::CameraState { camera } | Self::CameraView { camera, .. } => Some(*camera),
            Self::Function { .. } => None,
        }
    }
}

impl fmt::Display for ButtonAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CameraState { camera } => write!(f, "camera {camera}"),
            Self::CameraView {
                camera,
                view_type,
                index,
            } => write!(f, "camera {camera} view {view_type}/{index}"),
            Self::Function { function, value } => write!(f, "{function}({value})"),
        }
    }
}

/// A button descriptor handed to the panel runtime.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Button {
    pub style: ButtonStyle,
    pub action: ButtonAction,
}

impl Button {
    pub fn new(style: ButtonStyle, action: ButtonAction) -> Self {
        Self { style, action }
    }

    pub fn camera_state<I, S>(title: I, background: BackgroundColor, camera: u8) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            ButtonStyle::new(title, background),
            ButtonAction::CameraState { camera },
        )
    }

    pub fn camera_view<I, S>(
        title: I,
        background: BackgroundColor,
        camera: u8,
        view_type: u8,
        index: u8,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            ButtonStyle::new(title, background),
            ButtonAction::CameraView {
                camera,
                view_type,
                index,
            },
        )
    }

    pub fn function<I, S>(
        title: I,
        background: BackgroundColor,
        function: FunctionAction,
        value: i32,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            ButtonStyle::new(title, background),
            ButtonAction::Function { function, value },
        )
    }

    /// Title lines joined with a space.
    pub fn label(&self) -> String {
        self.style.title.join(" ")
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.label(), self.action)
    }
}
