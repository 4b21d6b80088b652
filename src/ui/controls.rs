//! Input panel: mode line, the five form fields and a view readout.

use super::formatters::format_stat_value;
use super::ThemeColors;
use crate::app::App;
use crate::input::{Focus, InputField};
use crate::plot::Mode;
use crate::util::LayoutConfig;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the input panel.
pub(super) fn draw_controls(
    f: &mut Frame<'_>,
    area: Rect,
    app: &App,
    layout: &LayoutConfig,
    colors: &ThemeColors,
) {
    let h = layout.controls.field_height;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Mode line
            Constraint::Length(h), // Range min / max
            Constraint::Length(h), // Points
            Constraint::Length(h), // Vectors
            Constraint::Length(h), // Equation
            Constraint::Min(0),    // Readout
        ])
        .split(area);

    draw_mode_line(f, chunks[0], app, colors);

    let range = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let fields = [
        (&app.range_min, Focus::RangeMin, range[0]),
        (&app.range_max, Focus::RangeMax, range[1]),
        (&app.points, Focus::Points, chunks[2]),
        (&app.vectors, Focus::Vectors, chunks[3]),
        (&app.equation, Focus::Equation, chunks[4]),
    ];
    let cursor_hidden = app.error_message.is_some();
    for (field, focus, rect) in fields {
        draw_field(f, rect, field, app.focus == focus && !cursor_hidden, colors);
    }

    draw_readout(f, chunks[5], app, colors);
}

fn draw_mode_line(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let mode_span = |mode: Mode| {
        let style = if app.mode == mode {
            Style::default()
                .fg(colors.bg)
                .bg(colors.heading)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.text)
        };
        Span::styled(format!(" {} ", mode.name()), style)
    };

    let line = Line::from(vec![
        Span::styled("Mode ", Style::default().fg(colors.label)),
        mode_span(Mode::TwoD),
        Span::raw(" "),
        mode_span(Mode::ThreeD),
    ]);
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(colors.bg)),
        area,
    );
}

fn draw_field(
    f: &mut Frame<'_>,
    area: Rect,
    field: &InputField,
    focused: bool,
    colors: &ThemeColors,
) {
    let border = if focused { colors.focus } else { colors.border };
    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    // Leave one column for the cursor.
    let visible = field.visible_tail(inner.width.saturating_sub(1) as usize);
    let paragraph = Paragraph::new(visible.to_string())
        .block(block)
        .style(Style::default().fg(colors.text));
    f.render_widget(paragraph, area);

    if focused && inner.width > 0 && inner.height > 0 {
        let used = unicode_width::UnicodeWidthStr::width(visible) as u16;
        f.set_cursor_position(Position::new(inner.x + used.min(inner.width - 1), inner.y));
    }
}

fn draw_readout(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let label = |s: &'static str| Span::styled(s, Style::default().fg(colors.label));
    let value = |s: String| Span::styled(s, Style::default().fg(colors.text));

    let mut lines = vec![Line::from(vec![
        label("Palette: "),
        value(app.palette.name().to_string()),
    ])];

    let [points_hint, vectors_hint, equation_hint] = app.mode.input_examples();
    for (name, hint) in [
        ("Points: ", points_hint),
        ("Vectors: ", vectors_hint),
        ("Equation: ", equation_hint),
    ] {
        lines.push(Line::from(vec![
            label(name),
            Span::styled(hint, Style::default().fg(colors.border)),
        ]));
    }

    if app.mode == Mode::ThreeD {
        let (az, el) = app.camera.degrees();
        lines.push(Line::from(vec![
            label("View: "),
            value(format!("az {:.0}°  el {:.0}°", az, el)),
        ]));
        if let Some(grid) = app.scene.surface_grid() {
            if let Some((lo, hi)) = grid.z_extent() {
                lines.push(Line::from(vec![
                    label("z: "),
                    value(format!("{} .. {}", format_stat_value(lo), format_stat_value(hi))),
                ]));
            }
        }
    }

    if let Some(summary) = &app.last_summary {
        if let Some(eq) = &summary.equation {
            lines.push(Line::from(vec![label("f = "), value(eq.clone())]));
        }
        if summary.undefined_samples > 0 {
            lines.push(Line::from(Span::styled(
                format!("{} undefined samples", summary.undefined_samples),
                Style::default().fg(colors.error),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
