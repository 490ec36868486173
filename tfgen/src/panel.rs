//! Rendering and exporting panel button pages.

use std::path::Path;

use anyhow::Context;
use buttonpage::{
    BackgroundColor, ButtonAction, ButtonPage, CameraPage, GRID_COLS, GRID_ROWS, PageConfig,
};
use clap::ValueEnum;
use colored::{Color, Colorize};
use tokio::fs;

/// Width of one rendered grid cell.
const CELL_WIDTH: usize = 10;

/// File format used when exporting a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum PageFormat {
    #[default]
    Toml,
    Json,
}

impl PageFormat {
    /// Format implied by a file extension, if any.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

fn terminal_color(background: BackgroundColor) -> Color {
    match background {
        BackgroundColor::Black => Color::Black,
        BackgroundColor::Gray => Color::BrightBlack,
        BackgroundColor::White => Color::White,
        BackgroundColor::Red => Color::Red,
        BackgroundColor::Green => Color::Green,
        BackgroundColor::Blue => Color::Blue,
        BackgroundColor::Yellow => Color::Yellow,
        BackgroundColor::Orange => Color::TrueColor {
            r: 255,
            g: 140,
            b: 0,
        },
        BackgroundColor::Purple => Color::Magenta,
    }
}

fn text_color(background: BackgroundColor) -> Color {
    match background {
        BackgroundColor::White | BackgroundColor::Yellow | BackgroundColor::Orange => Color::Black,
        _ => Color::White,
    }
}

fn fit(text: &str) -> String {
    let text: String = text.chars().take(CELL_WIDTH).collect();
    format!("{text:^CELL_WIDTH$}")
}

/// Renders `page` as a grid, one terminal line per title line.
///
/// Empty slots are drawn as dots. Color codes are only emitted when
/// `colored` has color output enabled.
pub fn render<P: ButtonPage + ?Sized>(page: &P) -> String {
    let mut out = String::new();
    let cells = vec!["-".repeat(CELL_WIDTH); usize::from(GRID_COLS)];
    let border = format!("+{}+\n", cells.join("+"));

    out.push_str(&border);
    for row in 1..=GRID_ROWS {
        let buttons: Vec<_> = (1..=GRID_COLS).map(|col| page.button(row, col)).collect();
        let lines = buttons
            .iter()
            .flatten()
            .map(|button| button.style.title.len())
            .max()
            .unwrap_or(1)
            .max(1);

        for line in 0..lines {
            out.push('|');
            for button in &buttons {
                let cell = match button {
                    Some(button) => {
                        let title = button.style.title.get(line).map(String::as_str);
                        let text = fit(title.unwrap_or(""));
                        text.color(text_color(button.style.background))
                            .on_color(terminal_color(button.style.background))
                            .to_string()
                    }
                    None if line == 0 => fit("."),
                    None => fit(""),
                };
                out.push_str(&cell);
                out.push('|');
            }
            out.push('\n');
        }
        out.push_str(&border);
    }
    out
}

/// One line per button: position, title and action.
pub fn legend<P: ButtonPage + ?Sized>(page: &P) -> String {
    page.buttons()
        .into_iter()
        .map(|(position, button)| {
            let target = match button.action {
                ButtonAction::CameraState { .. } | ButtonAction::CameraView { .. } => "camera",
                ButtonAction::Function { .. } => "function",
            };
            format!(
                "{:<8} {:<18} {target:<8} {} [{}]\n",
                position.to_string(),
                button.label(),
                button.action,
                button.style.background
            )
        })
        .collect()
}

/// Loads a page file, or the built-in camera page when `path` is `None`.
pub async fn load_page(path: Option<&Path>) -> anyhow::Result<Box<dyn ButtonPage>> {
    let Some(path) = path else {
        return Ok(Box::new(CameraPage));
    };

    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("can not read page {}", path.display()))?;
    let page = match PageFormat::from_path(path).unwrap_or_default() {
        PageFormat::Toml => PageConfig::from_toml(&content)?,
        PageFormat::Json => {
            let page: PageConfig = serde_json::from_str(&content)
                .with_context(|| format!("invalid page {}", path.display()))?;
            page.validate()?;
            page
        }
    };
    info!("loaded page {:?} from {}", page.name, path.display());
    Ok(Box::new(page))
}

/// Serializes `page` in `format`.
pub fn export_string<P: ButtonPage + ?Sized>(
    page: &P,
    format: PageFormat,
) -> anyhow::Result<String> {
    let config = PageConfig::from_page(page);
    Ok(match format {
        PageFormat::Toml => config.to_toml()?,
        PageFormat::Json => serde_json::to_string_pretty(&config)?,
    })
}

/// Writes `page` to `path`, picking the format from the extension unless
/// `format` is given.
pub async fn export<P: ButtonPage + ?Sized>(
    page: &P,
    path: &Path,
    format: Option<PageFormat>,
) -> anyhow::Result<PageFormat> {
    let format = format
        .or_else(|| PageFormat::from_path(path))
        .unwrap_or_default();
    let content = export_string(page, format)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, content)
        .await
        .with_context(|| format!("can not write {}", path.display()))?;
    Ok(format)
}

/// JSON Schema of the page file format.
pub fn json_schema() -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&PageConfig::json_schema())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_camera_page() {
        colored::control::set_override(false);
        let grid = render(&CameraPage);
        let lines: Vec<&str> = grid.lines().collect();

        // border + 2 title lines per row + border, four times
        assert_eq!(lines.len(), 1 + 4 * 3);
        assert_eq!(lines[0], lines[3]);
        assert!(lines[1].starts_with("|   HOME   |   CAM    |"));
        assert!(lines[2].starts_with("|          |    2     |"));
        assert!(lines[4].contains(" VIEWS "));
        assert!(lines[10].contains("BRIGHT"));
        assert_eq!(lines[12], lines[0]);
        let width = 1 + 8 * (CELL_WIDTH + 1);
        assert!(grid.lines().all(|line| line.chars().count() == width));
    }

    #[test]
    fn test_render_sparse_page() {
        colored::control::set_override(false);
        let page = PageConfig::from_toml(
            r#"
name = "one"

[[buttons]]
row = 2
col = 2
title = ["A VERY LONG TITLE"]

[buttons.action]
kind = "camera_state"
camera = 1
"#,
        )
        .unwrap();
        let grid = render(&page);
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 1 + 4 * 2);
        assert!(lines[1].starts_with("|    .     |    .     |"));
        assert!(lines[3].starts_with("|    .     |A VERY LON|"));
    }

    #[test]
    fn test_legend() {
        let legend = legend(&CameraPage);
        assert_eq!(legend.lines().count(), 32);
        assert!(legend.lines().next().unwrap().starts_with("(1, 1)   HOME"));
        assert!(legend.contains("camera 2 view 1/2"));
        assert!(legend.contains("brightness(-10) [white]"));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            PageFormat::from_path(Path::new("a.toml")),
            Some(PageFormat::Toml)
        );
        assert_eq!(
            PageFormat::from_path(Path::new("a.json")),
            Some(PageFormat::Json)
        );
        assert_eq!(PageFormat::from_path(Path::new("a")), None);
    }

    #[tokio::test]
    async fn test_export_and_load() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["pages/camera.toml", "pages/camera.json"] {
            let path = dir.path().join(name);
            export(&CameraPage, &path, None).await.unwrap();

            let page = load_page(Some(&path)).await.unwrap();
            assert_eq!(page.name(), "camera");
            assert_eq!(page.button(2, 2), CameraPage.button(2, 2));
            assert_eq!(page.buttons().len(), 32);
        }
    }

    #[tokio::test]
    async fn test_load_invalid_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        let content = r#"
name = "bad"

[[buttons]]
row = 9
col = 1
title = ["X"]

[buttons.action]
kind = "camera_state"
camera = 1
"#;
        std::fs::write(&path, content).unwrap();
        let err = load_page(Some(&path)).await.err().unwrap();
        assert!(err.to_string().contains("outside the 4x8 grid"));
    }

    #[tokio::test]
    async fn test_builtin_page_by_default() {
        let page = load_page(None).await.unwrap();
        assert_eq!(page.name(), CameraPage::NAME);
    }

    #[test]
    fn test_json_schema() {
        assert!(json_schema().unwrap().contains("\"SlotConfig\""));
    }
}
