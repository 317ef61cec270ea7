//! Theme configuration for decorations and the board.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;
use serde::Deserialize;

/// Which theme to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Pick from the terminal background.
    #[default]
    Auto,
    Dark,
    Light,
}

/// Colors and styles used when drawing decorations.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Informational labels and the board title.
    pub highlight: Color,
    /// Alert text.
    pub warning: Color,
    /// Alarm count when alarms are firing.
    pub critical: Color,
    /// Alarm count when nothing is firing.
    pub healthy: Color,
    /// Node borders on the board.
    pub border: Color,
    /// Style for node titles.
    pub header: Style,
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            warning: Color::Yellow,
            critical: Color::Red,
            healthy: Color::Green,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            warning: Color::Yellow,
            critical: Color::Red,
            healthy: Color::Green,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Auto => Self::auto_detect(),
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    /// Style for an alarm count.
    pub fn alarm_style(&self, count: u64) -> Style {
        if count > 0 {
            Style::default().fg(self.critical).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.healthy)
        }
    }

    pub fn event_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn info_style(&self) -> Style {
        Style::default().fg(self.highlight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alarm_style_depends_on_count() {
        let theme = Theme::dark();
        assert_eq!(theme.alarm_style(0).fg, Some(Color::Green));

        let firing = theme.alarm_style(2);
        assert_eq!(firing.fg, Some(Color::Red));
        assert!(firing.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_from_choice() {
        assert_eq!(Theme::from_choice(ThemeChoice::Dark), Theme::dark());
        assert_eq!(Theme::from_choice(ThemeChoice::Light), Theme::light());
    }

    #[test]
    fn test_theme_choice_deserialize() {
        let choice: ThemeChoice = serde_json::from_str(r#""light""#).unwrap();
        assert_eq!(choice, ThemeChoice::Light);
    }
}
