//! Color table and legend shared by all renders

use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

/// An RGB display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub(crate) fn to_plotters(self) -> RGBColor {
        RGBColor(self.0, self.1, self.2)
    }
}

/// Ordered sequence of display colors. Index 0 is reserved for the
/// unclassified/background category; class `i` renders with color `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTable {
    colors: Vec<Rgb>,
}

impl Default for ColorTable {
    fn default() -> Self {
        // gray, red, blue, seagreen, cyan, magenta, orange, purple, pink
        Self {
            colors: vec![
                Rgb(128, 128, 128),
                Rgb(255, 0, 0),
                Rgb(0, 0, 255),
                Rgb(46, 139, 87),
                Rgb(0, 255, 255),
                Rgb(255, 0, 255),
                Rgb(255, 165, 0),
                Rgb(128, 0, 128),
                Rgb(255, 192, 203),
            ],
        }
    }
}

impl ColorTable {
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }
}

impl std::ops::Index<usize> for ColorTable {
    type Output = Rgb;

    fn index(&self, index: usize) -> &Rgb {
        &self.colors[index]
    }
}

/// One legend entry: a class label paired with its display color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb,
}

/// Label-color pairings for every class, derived deterministically from the
/// color table and class count. Entry 0 is always the background entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legend {
    entries: Vec<LegendEntry>,
}

impl Legend {
    /// Derive the legend for `n_classes` classes.
    ///
    /// Panics if the palette has fewer than `n_classes` colors; sessions
    /// enforce that invariant at construction.
    pub fn new(palette: &ColorTable, n_classes: usize) -> Self {
        let entries = (0..n_classes)
            .map(|i| {
                let label = if i == 0 {
                    "Background".to_string()
                } else {
                    format!("Gaussian_{i}")
                };
                LegendEntry {
                    label,
                    color: palette[i],
                }
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LegendEntry> {
        self.entries.iter()
    }
}
