//! Color themes.
//!
//! Dusk is the default and mirrors the brand's purple-on-dark marketing
//! palette; Daylight is for light terminals, Blossom leans into the seasonal
//! promo styling.

use propout_core::PropertyStatus;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dusk,
    Daylight,
    Blossom,
}

impl Theme {
    pub fn next(self) -> Self {
        match self {
            Self::Dusk => Self::Daylight,
            Self::Daylight => Self::Blossom,
            Self::Blossom => Self::Dusk,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Dusk => "Dusk",
            Self::Daylight => "Daylight",
            Self::Blossom => "Blossom",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Self::Dusk => Palette::dusk(),
            Self::Daylight => Palette::daylight(),
            Self::Blossom => Palette::blossom(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub bg_secondary: Color,

    pub primary: Color,
    pub accent: Color,

    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    pub border: Color,
    pub border_active: Color,
    pub border_inactive: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_highlight: Color,

    pub status_bg: Color,
    pub status_fg: Color,

    pub selection_bg: Color,
    pub selection_fg: Color,
}

impl Palette {
    pub fn dusk() -> Self {
        Self {
            bg: Color::Rgb(20, 16, 28),
            fg: Color::Rgb(226, 220, 234),
            bg_secondary: Color::Rgb(32, 26, 44),

            primary: Color::Rgb(167, 139, 250), // Soft violet
            accent: Color::Rgb(244, 114, 182),  // Rose

            success: Color::Rgb(52, 211, 153),
            warning: Color::Rgb(251, 191, 36),
            error: Color::Rgb(248, 113, 113),
            info: Color::Rgb(96, 165, 250),

            border: Color::Rgb(62, 52, 86),
            border_active: Color::Rgb(167, 139, 250),
            border_inactive: Color::Rgb(44, 38, 62),

            text_primary: Color::Rgb(240, 236, 248),
            text_secondary: Color::Rgb(186, 178, 202),
            text_muted: Color::Rgb(124, 116, 144),
            text_highlight: Color::Rgb(253, 224, 71),

            status_bg: Color::Rgb(38, 30, 54),
            status_fg: Color::Rgb(206, 198, 222),

            selection_bg: Color::Rgb(76, 58, 120),
            selection_fg: Color::Rgb(255, 255, 255),
        }
    }

    pub fn daylight() -> Self {
        Self {
            bg: Color::Rgb(250, 249, 252),
            fg: Color::Rgb(38, 32, 50),
            bg_secondary: Color::Rgb(240, 237, 246),

            primary: Color::Rgb(124, 58, 237),
            accent: Color::Rgb(219, 39, 119),

            success: Color::Rgb(22, 163, 74),
            warning: Color::Rgb(217, 119, 6),
            error: Color::Rgb(220, 38, 38),
            info: Color::Rgb(37, 99, 235),

            border: Color::Rgb(210, 204, 222),
            border_active: Color::Rgb(124, 58, 237),
            border_inactive: Color::Rgb(226, 222, 236),

            text_primary: Color::Rgb(28, 24, 40),
            text_secondary: Color::Rgb(90, 82, 108),
            text_muted: Color::Rgb(148, 140, 166),
            text_highlight: Color::Rgb(180, 83, 9),

            status_bg: Color::Rgb(236, 232, 244),
            status_fg: Color::Rgb(58, 50, 76),

            selection_bg: Color::Rgb(124, 58, 237),
            selection_fg: Color::Rgb(255, 255, 255),
        }
    }

    pub fn blossom() -> Self {
        Self {
            bg: Color::Rgb(28, 14, 22),
            fg: Color::Rgb(244, 226, 234),
            bg_secondary: Color::Rgb(42, 22, 34),

            primary: Color::Rgb(251, 113, 133),
            accent: Color::Rgb(253, 186, 116),

            success: Color::Rgb(110, 231, 183),
            warning: Color::Rgb(253, 224, 71),
            error: Color::Rgb(252, 165, 165),
            info: Color::Rgb(147, 197, 253),

            border: Color::Rgb(94, 46, 66),
            border_active: Color::Rgb(251, 113, 133),
            border_inactive: Color::Rgb(62, 32, 46),

            text_primary: Color::Rgb(252, 240, 246),
            text_secondary: Color::Rgb(212, 184, 198),
            text_muted: Color::Rgb(150, 116, 132),
            text_highlight: Color::Rgb(253, 186, 116),

            status_bg: Color::Rgb(48, 24, 38),
            status_fg: Color::Rgb(226, 198, 212),

            selection_bg: Color::Rgb(136, 58, 86),
            selection_fg: Color::Rgb(255, 255, 255),
        }
    }

    // Style helpers

    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn primary_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.text_highlight)
            .add_modifier(Modifier::BOLD)
    }

    pub fn price_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, active: bool) -> Style {
        if active {
            Style::default().fg(self.border_active)
        } else {
            Style::default().fg(self.border_inactive)
        }
    }

    pub fn title_style(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(self.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text_secondary)
        }
    }

    pub fn selection_style(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style(&self) -> Style {
        Style::default().fg(self.status_fg).bg(self.status_bg)
    }

    pub fn input_style(&self, editing: bool) -> Style {
        if editing {
            Style::default().fg(self.text_primary).bg(self.bg_secondary)
        } else {
            Style::default().fg(self.text_muted).bg(self.bg)
        }
    }

    /// Badge color for a property's availability.
    pub fn status_style(&self, status: PropertyStatus) -> Style {
        let color = match status {
            PropertyStatus::Available => self.success,
            PropertyStatus::Booked => self.warning,
            PropertyStatus::Maintenance => self.error,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn shortcut_key_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn shortcut_desc_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }
}
