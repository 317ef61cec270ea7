//! Watch-mode board: every decorated node drawn as a bordered tile.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, DecoratedNode};

/// Render the whole board: header, node tiles, status bar.
pub fn render(frame: &mut Frame, app: &App, nodes: &[DecoratedNode]) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(3),    // Tiles
        Constraint::Length(1), // Status bar
    ])
    .split(frame.area());

    render_header(frame, app, nodes, chunks[0]);
    render_tiles(frame, app, nodes, chunks[1]);
    render_status_bar(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, nodes: &[DecoratedNode], area: Rect) {
    let alarmed = nodes.iter().filter(|n| n.alarms > 0).count();

    let line = Line::from(vec![
        Span::styled(" FLOW OVERLAY ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(
            format!("{}", nodes.len()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" flows │ "),
        if alarmed > 0 {
            Span::styled(format!("{}", alarmed), app.theme.alarm_style(alarmed as u64))
        } else {
            Span::styled("0", Style::default().add_modifier(Modifier::DIM))
        },
        Span::raw(" alarmed"),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Tile size for a node canvas, borders included.
fn tile_size(app: &App) -> (u16, u16) {
    (
        app.settings.node_width.saturating_add(2),
        app.settings.node_height.saturating_add(2),
    )
}

fn render_tiles(frame: &mut Frame, app: &App, nodes: &[DecoratedNode], area: Rect) {
    if nodes.is_empty() {
        let paragraph = Paragraph::new(" No decorated nodes")
            .style(Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(paragraph, area);
        return;
    }

    let (tile_width, tile_height) = tile_size(app);
    let columns = (area.width / tile_width.max(1)).max(1);

    for (index, decorated) in nodes.iter().enumerate() {
        let index = index as u16;
        let x = area.x + (index % columns) * tile_width;
        let y = area.y + (index / columns) * tile_height;
        if y + tile_height > area.y + area.height {
            break;
        }

        let tile = Rect::new(x, y, tile_width.min(area.width), tile_height);
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", decorated.node.display_name()),
                app.theme.header,
            ))
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border));
        let inner = block.inner(tile);

        frame.render_widget(block, tile);
        frame.render_widget(&decorated.canvas, inner);
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = if let Some(ref err) = app.load_error {
        format!(" Error: {} | q:quit r:retry", err)
    } else if let Some(updated) = app.last_updated {
        format!(
            " {} | Updated {:.1}s ago | q:quit r:reload",
            app.source_description(),
            updated.elapsed().as_secs_f64(),
        )
    } else {
        " Loading... | q:quit".to_string()
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::source::FileSource;
    use crate::ui::ThemeChoice;
    use ratatui::{backend::TestBackend, Terminal};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn alarmed_dashboard() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{
                "alarms": {{ "current": [ {{ "ResourceArn": "arn:flow:a", "AlarmCount": 4 }} ] }},
                "nodes": [
                    {{ "id": "arn:flow:a", "title": "MediaConnect Flow", "label": "ingest",
                       "data": {{ "Source": {{}} }} }}
                ]
            }}"#
        )
        .unwrap();
        file
    }

    fn loaded_app(file: &NamedTempFile) -> App {
        let settings = Settings {
            theme: ThemeChoice::Dark,
            node_width: 16,
            ..Settings::default()
        };
        let mut app = App::new(FileSource::new(file.path()), settings);
        app.reload_data();
        app
    }

    #[test]
    fn test_board_shows_decorated_tiles() {
        let file = alarmed_dashboard();
        let app = loaded_app(&file);
        let nodes = app.decorated_nodes().unwrap();

        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal.draw(|frame| render(frame, &app, &nodes)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("FLOW OVERLAY"));
        assert!(text.contains("ingest"));
        assert!(text.contains("Alarms: 4"));
        assert!(text.contains("Alerts: 0"));
        assert!(text.contains("Standard"));
        assert!(text.contains("1 alarmed"));
    }

    #[test]
    fn test_header_counts_rendered_nodes() {
        let file = alarmed_dashboard();
        let app = loaded_app(&file);

        let mut terminal = Terminal::new(TestBackend::new(60, 6)).unwrap();
        terminal.draw(|frame| render(frame, &app, &[])).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("0 flows"));
        assert!(text.contains("0 alarmed"));
    }

    #[test]
    fn test_board_without_nodes() {
        let settings = Settings {
            theme: ThemeChoice::Dark,
            ..Settings::default()
        };
        let mut app = App::new(FileSource::new("/nonexistent/dashboard.json"), settings);
        app.reload_data();

        let mut terminal = Terminal::new(TestBackend::new(60, 6)).unwrap();
        terminal.draw(|frame| render(frame, &app, &[])).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("No decorated nodes"));
        assert!(text.contains("Error: Read error"));
    }
}
