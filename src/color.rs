use std::collections::HashMap;

use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct `#rrggbb` colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            format!(
                "#{:02x}{:02x}{:02x}",
                (rgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
                (rgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
                (rgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: category label → colour
// ---------------------------------------------------------------------------

/// Maps the categories of one chart dimension to distinct colours.
///
/// Categories keep the order they were given in, so the first category always
/// gets the first hue.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: HashMap<String, String>,
    default_color: String,
}

impl ColorMap {
    /// Build a colour map for the given categories. Duplicates are ignored.
    pub fn new<'a>(categories: impl IntoIterator<Item = &'a str>) -> Self {
        let mut ordered: Vec<&str> = Vec::new();
        for cat in categories {
            if !ordered.contains(&cat) {
                ordered.push(cat);
            }
        }

        let palette = generate_palette(ordered.len());
        let mapping = ordered
            .into_iter()
            .zip(palette)
            .map(|(cat, color)| (cat.to_string(), color))
            .collect();

        ColorMap {
            mapping,
            default_color: "#808080".to_string(),
        }
    }

    /// Look up the colour for a category.
    pub fn color_for(&self, category: &str) -> &str {
        self.mapping
            .get(category)
            .map(String::as_str)
            .unwrap_or(&self.default_color)
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}
