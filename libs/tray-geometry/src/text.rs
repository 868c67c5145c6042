//! # Label Text
//!
//! Glyph outlines come from a [`TextGeometryProvider`]. The tray builders
//! only ask for a flat outline; extrusion depth, rotation and placement are
//! applied afterwards so every provider engraves the same way.

use thiserror::Error;

/// Horizontal anchor of a label relative to its origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl HAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            HAlign::Left => "left",
            HAlign::Center => "center",
            HAlign::Right => "right",
        }
    }
}

/// Vertical anchor of a label relative to its origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VAlign {
    Top,
    #[default]
    Center,
    Baseline,
    Bottom,
}

impl VAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            VAlign::Top => "top",
            VAlign::Center => "center",
            VAlign::Baseline => "baseline",
            VAlign::Bottom => "bottom",
        }
    }
}

/// Font and anchoring of a label. Defaults to centred on both axes.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub font: String,
    pub halign: HAlign,
    pub valign: VAlign,
}

impl TextStyle {
    pub fn new(size: f64, font: impl Into<String>) -> Self {
        Self {
            size,
            font: font.into(),
            halign: HAlign::default(),
            valign: VAlign::default(),
        }
    }

    pub fn with_halign(mut self, halign: HAlign) -> Self {
        self.halign = halign;
        self
    }

    pub fn with_valign(mut self, valign: VAlign) -> Self {
        self.valign = valign;
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }
}

/// Reasons a provider cannot produce glyph geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LabelError {
    #[error("label text is empty")]
    EmptyText,

    #[error("no glyph for character {ch:?}")]
    MissingGlyph { ch: char },

    #[error("no font specified")]
    MissingFont,

    #[error("text size must be positive: {size}")]
    InvalidSize { size: f64 },
}

/// Source of flat glyph outlines for engraved labels.
///
/// Implementations return a 2D solid in the XY plane anchored per the
/// style's alignment. They must be deterministic: the same text and style
/// always yield the same outline.
pub trait TextGeometryProvider: Send + Sync {
    fn outline(&self, text: &str, style: &TextStyle) -> Result<crate::Solid, LabelError>;
}

/// Provider that defers glyph rendering to OpenSCAD's own `text()`.
///
/// It validates what OpenSCAD cannot recover from and emits a
/// [`SolidNode::Text`](crate::SolidNode::Text) node.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScadTextProvider;

impl TextGeometryProvider for ScadTextProvider {
    fn outline(&self, text: &str, style: &TextStyle) -> Result<crate::Solid, LabelError> {
        if text.trim().is_empty() {
            return Err(LabelError::EmptyText);
        }
        if let Some(ch) = text.chars().find(|c| c.is_control()) {
            return Err(LabelError::MissingGlyph { ch });
        }
        if style.font.trim().is_empty() {
            return Err(LabelError::MissingFont);
        }
        if !(style.size.is_finite() && style.size > 0.0) {
            return Err(LabelError::InvalidSize { size: style.size });
        }
        Ok(crate::Solid::text_outline(text, style.clone()))
    }
}

// =============================================================================
// TESTS
// =============================================================================
