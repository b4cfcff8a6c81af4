use super::app::App;
use crate::catalog::ItemKind;
use crate::index::Route;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Accent color per content kind. Exhaustive so a new kind cannot ship
/// without a color.
fn kind_color(kind: ItemKind) -> Color {
    match kind {
        ItemKind::Framework => Color::Cyan,
        ItemKind::Concept => Color::Green,
        ItemKind::Pattern => Color::Magenta,
        ItemKind::Guide => Color::Yellow,
        ItemKind::Tool => Color::Blue,
        ItemKind::Glossary => Color::Gray,
    }
}

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header / breadcrumb
            Constraint::Min(8),    // Page body
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);
    draw_page(f, app, chunks[1]);
    draw_status_bar(f, app, chunks[2]);

    if app.modal.open {
        draw_search_modal(f, app);
    }
    if app.help_open {
        draw_help_overlay(f);
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let crumb = match app.route {
        Route::Home => "home".to_string(),
        Route::Section(kind) => format!("home / {}", kind.section_slug()),
        Route::Detail(id) => app
            .index()
            .get(id)
            .map(|item| format!("home / {} / {}", item.kind.section_slug(), item.title))
            .unwrap_or_else(|| "home".to_string()),
        Route::NotFound => "not found".to_string(),
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "agx",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(crumb, Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn draw_page(f: &mut Frame, app: &App, area: Rect) {
    match app.route {
        Route::Home => draw_home(f, app, area),
        Route::Section(kind) => draw_section(f, app, kind, area),
        Route::Detail(id) => draw_detail(f, app, id, area),
        Route::NotFound => draw_not_found(f, area),
    }
}

fn draw_home(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "AI Agent Catalog",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];

    for kind in ItemKind::ALL {
        let count = app.index().ids_of_kind(kind).len();
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<16}", kind.section_title()),
                Style::default().fg(kind_color(kind)).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("{:>3}  ", count), Style::default().fg(Color::DarkGray)),
            Span::raw(kind.blurb()),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "n/p: sections · /: search · ?: help",
        Style::default().fg(Color::DarkGray),
    )));

    let home = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title(" Home "))
        .wrap(Wrap { trim: false });
    f.render_widget(home, area);
}

fn draw_section(f: &mut Frame, app: &App, kind: ItemKind, area: Rect) {
    let ids = app.index().ids_of_kind(kind);
    let items: Vec<ListItem> = ids
        .iter()
        .enumerate()
        .map(|(i, &id)| {
            let item = &app.index().items()[id];
            let style = if i == app.section_cursor {
                Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let mut spans = vec![Span::styled(
                format!("{:<28}", item.title),
                Style::default().fg(kind_color(kind)),
            )];
            if let Some(ref category) = item.category {
                spans.push(Span::styled(
                    format!("[{}] ", category),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            spans.push(Span::raw(truncate(&item.description, area.width.saturating_sub(34) as usize)));

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let title = format!(" {} — {} ", kind.section_title(), kind.blurb());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn draw_detail(f: &mut Frame, app: &App, id: usize, area: Rect) {
    let Some(item) = app.index().get(id) else {
        draw_not_found(f, area);
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                item.title.clone(),
                Style::default()
                    .fg(kind_color(item.kind))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(item.kind.label(), Style::default().fg(Color::DarkGray)),
        ]),
        Line::raw(""),
    ];
    if let Some(ref category) = item.category {
        lines.push(Line::from(Span::styled(
            format!("Category: {}", category),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::raw(""));
    }
    lines.push(Line::raw(item.description.clone()));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        item.href.clone(),
        Style::default().fg(Color::Blue),
    )));

    let detail = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", item.title)))
        .wrap(Wrap { trim: false });
    f.render_widget(detail, area);
}

fn draw_not_found(f: &mut Frame, area: Rect) {
    let msg = Paragraph::new("404 — this page does not exist.\n\nPress Esc or h to go home.")
        .block(Block::default().borders(Borders::ALL).title(" Not Found "))
        .style(Style::default().fg(Color::Red));
    f.render_widget(msg, area);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status = Paragraph::new(app.status.as_str()).style(Style::default().fg(Color::Cyan));
    f.render_widget(status, area);
}

fn draw_search_modal(f: &mut Frame, app: &App) {
    // Input row + capped result list + borders.
    let height = (app.modal.results.len().max(1) + 4) as u16;
    let area = centered_rect(60, height, f.area());

    f.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let input = Paragraph::new(app.modal.query.as_str())
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search (Enter: open, Esc: close) "),
        );
    f.render_widget(input, chunks[0]);
    f.set_cursor_position((
        chunks[0].x + app.modal.query.len() as u16 + 1,
        chunks[0].y + 1,
    ));

    if app.modal.results.is_empty() {
        let empty = if app.modal.query.trim().is_empty() {
            "Type to search the catalog"
        } else {
            "No results"
        };
        let msg = Paragraph::new(empty)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(msg, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = app
        .modal
        .results
        .iter()
        .enumerate()
        .map(|(i, &id)| {
            let item = &app.index().items()[id];
            let style = if i == app.modal.highlighted {
                Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let line = Line::from(vec![
                Span::styled(
                    format!("{:<9}", item.kind.label()),
                    Style::default().fg(kind_color(item.kind)),
                ),
                Span::raw(item.title.clone()),
                Span::styled(format!("  {}", item.href), Style::default().fg(Color::DarkGray)),
            ]);
            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Results ({}) ", app.modal.results.len())),
    );
    f.render_widget(list, chunks[1]);
}

fn draw_help_overlay(f: &mut Frame) {
    let area = centered_rect(50, 16, f.area());
    f.render_widget(Clear, area);

    let rows = [
        ("Ctrl+K or /", "open search"),
        ("Esc", "close overlay / go back"),
        ("Enter", "open highlighted entry"),
        ("Down/Up, Ctrl+N/P", "move highlight"),
        ("n / p", "next / previous section"),
        ("h", "home"),
        ("?", "toggle this help"),
        ("q, Ctrl+C", "quit"),
    ];

    let lines: Vec<Line> = rows
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<20}", keys),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(*action),
            ])
        })
        .collect();

    let help = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title(" Keyboard Shortcuts "));
    f.render_widget(help, area);
}

/// Center a fixed-height, percentage-width rectangle inside `r`.
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let height = height.min(r.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(r.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Truncate a string for single-line list display.
fn truncate(s: &str, max: usize) -> String {
    if max == 0 || s.len() <= max {
        return s.to_string();
    }
    let cut = s
        .char_indices()
        .take_while(|(i, _)| *i < max.saturating_sub(3))
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    format!("{}...", &s[..cut])
}
