use eframe::egui::Color32;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub foreground: Color32,
    pub heading_color: Color32,
    pub accent: Color32,
    pub panel_background: Color32,
    pub title_size: f32,
    pub body_size: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x12, 0x12, 0x14),
            foreground: Color32::from_rgb(0xC8, 0xC8, 0xC8),
            heading_color: Color32::WHITE,
            accent: Color32::from_rgb(0x52, 0x94, 0xE2),
            panel_background: Color32::from_rgb(0x1E, 0x1E, 0x22),
            title_size: 72.0,
            body_size: 28.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::from_rgb(0xF4, 0xF2, 0xEE),
            foreground: Color32::from_rgb(0x1A, 0x1A, 0x2E),
            heading_color: Color32::from_rgb(0x16, 0x21, 0x3E),
            accent: Color32::from_rgb(0x0F, 0x34, 0x60),
            panel_background: Color32::WHITE,
            title_size: 72.0,
            body_size: 28.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn toggled(&self) -> Self {
        if self.name == "dark" {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(
            color.r(),
            color.g(),
            color.b(),
            (opacity.clamp(0.0, 1.0) * 255.0) as u8,
        )
    }

    /// Fallback backdrop for slides without a poster or background color:
    /// a muted hue rotated per slide so the intro sweep reads visually.
    pub fn slide_backdrop(&self, index: usize) -> Color32 {
        let palette: [Color32; 6] = if self.name == "dark" {
            [
                Color32::from_rgb(0x23, 0x2B, 0x3A),
                Color32::from_rgb(0x3A, 0x26, 0x2B),
                Color32::from_rgb(0x26, 0x38, 0x2E),
                Color32::from_rgb(0x38, 0x33, 0x22),
                Color32::from_rgb(0x2E, 0x26, 0x3A),
                Color32::from_rgb(0x22, 0x33, 0x38),
            ]
        } else {
            [
                Color32::from_rgb(0xD7, 0xE0, 0xEE),
                Color32::from_rgb(0xEE, 0xDA, 0xD7),
                Color32::from_rgb(0xD9, 0xEC, 0xDD),
                Color32::from_rgb(0xEC, 0xE6, 0xCF),
                Color32::from_rgb(0xE4, 0xD9, 0xEE),
                Color32::from_rgb(0xD3, 0xE8, 0xEA),
            ]
        };
        palette[index % palette.len()]
    }
}

/// Parse a `#RRGGBB` (or `RRGGBB`) hex color, as used in deck files.
pub fn parse_hex(s: &str) -> Option<Color32> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}
