//! Terminal rendering for the main window.

mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::viewmodel::MainViewModel;

use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

/// The main window: header with the root path, the folder list, key hints.
///
/// Registered transient in the composition root; holds no folder state of
/// its own - everything rendered comes from the view model.
#[derive(Debug, Clone)]
pub struct MainView {
    root_label: String,
}

impl MainView {
    pub fn new(root_label: impl Into<String>) -> Self {
        Self {
            root_label: root_label.into(),
        }
    }

    /// The root path shown in the header.
    pub fn root_label(&self) -> &str {
        &self.root_label
    }

    /// Render the folder list with the current selection highlighted.
    pub fn render(&self, frame: &mut Frame, view_model: &MainViewModel) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                " dirview ",
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.root_label.clone(), Style::default().fg(COLOR_DIM)),
        ]));
        frame.render_widget(header, chunks[0]);

        let mut lines: Vec<Line> = Vec::new();
        if view_model.folders().is_empty() {
            lines.push(Line::from(Span::styled(
                "No folders",
                Style::default().fg(COLOR_DIM),
            )));
        } else {
            let selected = view_model.selected_folder();
            for folder in view_model.folders() {
                let is_selected = selected == Some(folder);

                let marker = if is_selected { "> " } else { "  " };
                let name_style = if is_selected {
                    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };

                lines.push(Line::from(vec![
                    Span::styled(marker, name_style),
                    Span::styled(folder.name.clone(), name_style),
                    Span::raw("  "),
                    Span::styled(folder.path.clone(), Style::default().fg(COLOR_DIM)),
                ]));
            }
        }

        let title = format!(" Folders ({}) ", view_model.folders().len());
        let list = Paragraph::new(lines).block(
            Block::default()
                .title(Span::styled(
                    title,
                    Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(COLOR_BORDER)),
        );
        frame.render_widget(list, chunks[1]);

        let footer = Paragraph::new(Line::from(Span::styled(
            " ↑/↓ select · r refresh · q quit",
            Style::default().fg(COLOR_DIM),
        )));
        frame.render_widget(footer, chunks[2]);
    }
}
