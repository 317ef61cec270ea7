//! Shared text primitives used by every node decorator.

use ratatui::style::{Modifier, Style};

use super::canvas::{DrawingSurface, TextSlot};
use super::theme::Theme;
use crate::error::Result;

/// Font size at or above which decoration text is drawn bold.
pub const DEFAULT_BOLD_FONT_SIZE: u16 = 12;

/// The text-rendering primitives decorators draw through.
///
/// Each primitive lays out its text within `width` on `surface`.
pub trait OverlayTools: Send + Sync {
    fn set_alarm_text(
        &self,
        count: u64,
        surface: &mut dyn DrawingSurface,
        font_size: u16,
        width: u16,
    ) -> Result<()>;

    fn set_info_text(
        &self,
        label: &str,
        surface: &mut dyn DrawingSurface,
        font_size: u16,
        width: u16,
    ) -> Result<()>;

    fn set_event_text(
        &self,
        label: &str,
        surface: &mut dyn DrawingSurface,
        font_size: u16,
        width: u16,
    ) -> Result<()>;
}

/// Themed text primitives for terminal canvases.
#[derive(Debug, Clone)]
pub struct TextOverlay {
    theme: Theme,
    bold_font_size: u16,
}

impl TextOverlay {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            bold_font_size: DEFAULT_BOLD_FONT_SIZE,
        }
    }

    pub fn with_bold_font_size(mut self, bold_font_size: u16) -> Self {
        self.bold_font_size = bold_font_size;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    fn sized(&self, style: Style, font_size: u16) -> Style {
        if font_size >= self.bold_font_size {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

impl OverlayTools for TextOverlay {
    fn set_alarm_text(
        &self,
        count: u64,
        surface: &mut dyn DrawingSurface,
        font_size: u16,
        width: u16,
    ) -> Result<()> {
        let style = self.sized(self.theme.alarm_style(count), font_size);
        surface.draw_text(TextSlot::Alarm, &format!("Alarms: {}", count), style, width)
    }

    fn set_info_text(
        &self,
        label: &str,
        surface: &mut dyn DrawingSurface,
        font_size: u16,
        width: u16,
    ) -> Result<()> {
        let style = self.sized(self.theme.info_style(), font_size);
        surface.draw_text(TextSlot::Info, label, style, width)
    }

    fn set_event_text(
        &self,
        label: &str,
        surface: &mut dyn DrawingSurface,
        font_size: u16,
        width: u16,
    ) -> Result<()> {
        let style = self.sized(self.theme.event_style(), font_size);
        surface.draw_text(TextSlot::Event, label, style, width)
    }
}
