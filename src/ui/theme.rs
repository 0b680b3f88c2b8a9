use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Columns
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub list_background: ColorSpec,
    pub drag_over: ColorSpec,

    // Items
    pub item_background: ColorSpec,
    pub dragging: ColorSpec,

    // Footer mode colors
    pub footer_browse: ColorSpec,
    pub footer_drag: ColorSpec,
}

/// RGB color used by themes.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// Light greys with blue and green drag highlights.
    ///
    pub fn classic() -> Self {
        Theme {
            name: "classic".to_string(),
            primary: ColorSpec::rgb(0, 0, 0),
            text: ColorSpec::rgb(20, 20, 20),
            text_muted: ColorSpec::rgb(96, 96, 96),
            border_active: ColorSpec::rgb(0, 0, 0),
            border_normal: ColorSpec::rgb(128, 128, 128),
            list_background: ColorSpec::rgb(211, 211, 211), // lightgrey
            drag_over: ColorSpec::rgb(173, 216, 230),       // lightblue
            item_background: ColorSpec::rgb(128, 128, 128), // grey
            dragging: ColorSpec::rgb(144, 238, 144),        // lightgreen
            footer_browse: ColorSpec::rgb(173, 216, 230),
            footer_drag: ColorSpec::rgb(144, 238, 144),
        }
    }

    /// Tokyo Night inspired dark palette.
    ///
    pub fn midnight() -> Self {
        Theme {
            name: "midnight".to_string(),
            primary: ColorSpec::rgb(122, 162, 247),
            text: ColorSpec::rgb(192, 202, 245),
            text_muted: ColorSpec::rgb(86, 95, 137),
            border_active: ColorSpec::rgb(122, 162, 247),
            border_normal: ColorSpec::rgb(59, 66, 97),
            list_background: ColorSpec::rgb(26, 27, 38),
            drag_over: ColorSpec::rgb(41, 46, 66),
            item_background: ColorSpec::rgb(36, 40, 59),
            dragging: ColorSpec::rgb(158, 206, 106),
            footer_browse: ColorSpec::rgb(122, 162, 247),
            footer_drag: ColorSpec::rgb(158, 206, 106),
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(Self::classic()),
            "midnight" => Some(Self::midnight()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec!["classic".to_string(), "midnight".to_string()]
    }
}
