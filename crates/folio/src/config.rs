//! Configuration types for Folio page layout and export.
//!
//! All types implement [`serde::Deserialize`] with every field defaulted, so
//! a partial configuration file only overrides what it names.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining page and export settings.
//! - [`PageSettings`] - Physical page size, preset and document name.
//! - [`ExportConfig`] - Rendering mode and footer branding.
//!
//! # Example
//!
//! ```
//! # use folio::config::{AppConfig, PagePreset};
//! let config = AppConfig::default();
//! assert_eq!(config.page().preset(), PagePreset::CpCustom);
//! assert_eq!(config.page().width_inches(), 32.0);
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{pagination::PageGeometry, transform};

/// Smallest page dimension accepted, in inches.
pub const MIN_PAGE_INCHES: f64 = 1.0;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Page size section.
    #[serde(default)]
    page: PageSettings,

    /// Export section.
    #[serde(default)]
    export: ExportConfig,
}

impl AppConfig {
    pub fn new(page: PageSettings, export: ExportConfig) -> Self {
        Self { page, export }
    }

    /// Returns the page settings.
    pub fn page(&self) -> &PageSettings {
        &self.page
    }

    /// Returns the export configuration.
    pub fn export(&self) -> &ExportConfig {
        &self.export
    }

    pub fn with_page(mut self, page: PageSettings) -> Self {
        self.page = page;
        self
    }

    pub fn with_export(mut self, export: ExportConfig) -> Self {
        self.export = export;
        self
    }
}

/// A named page size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PagePreset {
    /// 32 x 36 inches
    #[default]
    #[serde(rename = "CP Custom")]
    CpCustom,
    /// 8 x 11.5 inches
    Letter,
    /// User-supplied dimensions
    Custom,
}

impl PagePreset {
    /// Width and height in inches, or `None` for [`PagePreset::Custom`].
    pub fn dimensions(self) -> Option<(f64, f64)> {
        match self {
            Self::CpCustom => Some((32.0, 36.0)),
            Self::Letter => Some((8.0, 11.5)),
            Self::Custom => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::CpCustom => "CP Custom",
            Self::Letter => "Letter",
            Self::Custom => "Custom",
        }
    }
}

impl fmt::Display for PagePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PagePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cp custom" | "cp-custom" | "cpcustom" => Ok(Self::CpCustom),
            "letter" => Ok(Self::Letter),
            "custom" => Ok(Self::Custom),
            _ => Err(format!(
                "invalid page preset `{s}`, valid values: cp-custom, letter, custom"
            )),
        }
    }
}

/// Physical page settings.
///
/// For every preset except [`PagePreset::Custom`] the effective dimensions
/// are the preset's, whatever the stored width and height say.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    preset: PagePreset,
    width_inches: f64,
    height_inches: f64,
    document_name: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            preset: PagePreset::CpCustom,
            width_inches: 32.0,
            height_inches: 36.0,
            document_name: "Data Model".to_string(),
        }
    }
}

impl PageSettings {
    /// Switches to `preset`, re-deriving width and height from it.
    ///
    /// Switching to [`PagePreset::Custom`] keeps the current dimensions.
    pub fn apply_preset(&mut self, preset: PagePreset) {
        self.preset = preset;
        if let Some((width, height)) = preset.dimensions() {
            self.width_inches = width;
            self.height_inches = height;
        }
    }

    /// Sets explicit dimensions and switches to [`PagePreset::Custom`].
    pub fn set_custom_size(&mut self, width_inches: f64, height_inches: f64) {
        self.preset = PagePreset::Custom;
        self.width_inches = width_inches;
        self.height_inches = height_inches;
    }

    pub fn set_document_name(&mut self, name: impl Into<String>) {
        self.document_name = name.into();
    }

    pub fn preset(&self) -> PagePreset {
        self.preset
    }

    /// Effective page width in inches, never below [`MIN_PAGE_INCHES`]
    pub fn width_inches(&self) -> f64 {
        let width = self
            .preset
            .dimensions()
            .map_or(self.width_inches, |(width, _)| width);
        sanitize_inches(width)
    }

    /// Effective page height in inches, never below [`MIN_PAGE_INCHES`]
    pub fn height_inches(&self) -> f64 {
        let height = self
            .preset
            .dimensions()
            .map_or(self.height_inches, |(_, height)| height);
        sanitize_inches(height)
    }

    pub fn document_name(&self) -> &str {
        &self.document_name
    }

    /// The page grid this size produces in actual-size mode
    pub fn geometry(&self) -> PageGeometry {
        PageGeometry::from_inches(self.width_inches(), self.height_inches())
    }

    /// Physical page width in points
    pub fn width_points(&self) -> f64 {
        transform::inches_to_points(self.width_inches())
    }

    /// Physical page height in points
    pub fn height_points(&self) -> f64 {
        transform::inches_to_points(self.height_inches())
    }
}

fn sanitize_inches(value: f64) -> f64 {
    if value.is_finite() {
        value.max(MIN_PAGE_INCHES)
    } else {
        MIN_PAGE_INCHES
    }
}

/// How a diagram is laid onto physical pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportMode {
    /// Unscaled, tiled over as many pages as the content needs
    #[default]
    ActualSize,
    /// Uniformly scaled to fit one sheet
    ScaledSingleSheet,
}

impl FromStr for ExportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('-', "_").to_ascii_lowercase().as_str() {
            "actual_size" | "actual" => Ok(Self::ActualSize),
            "scaled_single_sheet" | "scaled" => Ok(Self::ScaledSingleSheet),
            _ => Err(format!(
                "invalid export mode `{s}`, valid values: actual-size, scaled-single-sheet"
            )),
        }
    }
}

/// Export rendering configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    mode: ExportMode,
    /// Text printed at the left of every page footer.
    brand_label: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            mode: ExportMode::ActualSize,
            brand_label: "Folio".to_string(),
        }
    }
}

impl ExportConfig {
    pub fn new(mode: ExportMode, brand_label: impl Into<String>) -> Self {
        Self {
            mode,
            brand_label: brand_label.into(),
        }
    }

    pub fn mode(&self) -> ExportMode {
        self.mode
    }

    pub fn brand_label(&self) -> &str {
        &self.brand_label
    }

    pub fn with_mode(mut self, mode: ExportMode) -> Self {
        self.mode = mode;
        self
    }
}
