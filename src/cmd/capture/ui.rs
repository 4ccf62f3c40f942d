use super::App;
use super::theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use slate_core::{Effect, SceneOverflow, TakeMode};
use tui_popup::Popup;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_slate(frame, app, chunks[0]);
    render_effects(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);

    if app.session.qr_visible() {
        render_qr_overlay(frame, app);
    }
}

fn label(text: &str) -> Span<'_> {
    Span::styled(format!("{text:<8}"), Style::default().fg(theme::LABEL_FG))
}

fn value(text: String) -> Span<'static> {
    Span::styled(
        text,
        Style::default()
            .fg(theme::VALUE_FG)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_slate(frame: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let cameras = session.cameras();

    // roll line, selected camera highlighted when there is a choice
    let mut roll = vec![label("ROLL")];
    for (i, (cam, number)) in cameras.visible_rolls().enumerate() {
        let text = format!("{cam}{number:03}  ");
        if cameras.is_multi_cam() && i == cameras.current_cam() {
            roll.push(Span::styled(
                text,
                Style::default()
                    .fg(theme::SELECTED_FG)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            roll.push(value(text));
        }
    }
    roll.push(Span::styled(
        format!("({} cam)", session.display_num_cams()),
        Style::default().fg(theme::LABEL_FG),
    ));

    let mut scene = vec![label("SCENE"), value(session.scene_display())];
    if session.scene().letter().is_none() {
        scene.push(Span::styled(
            format!("  x:{}", session.scene().last_used_letter()),
            Style::default().fg(theme::LABEL_FG),
        ));
    }
    if let SceneOverflow::Wrap(ceiling) = session.scene().overflow() {
        scene.push(Span::styled(
            format!("  wraps after {ceiling:03}"),
            Style::default().fg(theme::LABEL_FG),
        ));
    }
    if session.dual().enabled() {
        let target = if session.dual().editing_prefix() {
            "  editing prefix"
        } else {
            "  editing scene"
        };
        scene.push(Span::styled(target, Style::default().fg(theme::LABEL_FG)));
    }

    let take = session.take();
    let mut take_line = vec![label("TAKE")];
    if take.mode() != TakeMode::OnlySeries {
        take_line.push(value(format!("{:02}", take.number())));
    }
    if let Some(mode_label) = take.mode().label() {
        let color = match take.mode() {
            TakeMode::Rehearsal => theme::REHEARSAL_FG,
            TakeMode::Plate => theme::PLATE_FG,
            _ => theme::SERIES_FG,
        };
        take_line.push(Span::styled(
            format!(" {mode_label}"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    let lines = vec![
        Line::from(roll),
        Line::from(""),
        Line::from(scene),
        Line::from(""),
        Line::from(take_line),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" slate ")
        .style(Style::default().bg(theme::SLATE_BG));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_effects(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .recent
        .iter()
        .map(|(key, effect)| {
            let style = match effect {
                Effect::EntryRejected { .. } => Style::default().fg(theme::REJECTED_FG),
                _ => Style::default(),
            };
            Line::from(vec![
                Span::styled(format!(" {key:?} "), Style::default().fg(theme::LABEL_FG)),
                Span::styled(effect.to_string(), style),
            ])
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title(" effects ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let buffered = app.dispatcher.buffered();
    let left = if buffered.is_empty() {
        " CAPTURE".to_string()
    } else {
        format!(" CAPTURE | {buffered}")
    };
    let right = "Esc/Ctrl-C:quit ";

    let available = area.width as usize;
    let used = left.width() + right.width();
    let text = if used < available {
        let padding = available - used;
        format!("{left}{:padding$}{right}", "")
    } else {
        left
    };

    let bar = Paragraph::new(text).style(
        Style::default()
            .bg(theme::STATUS_BAR_BG)
            .fg(theme::STATUS_BAR_FG),
    );
    frame.render_widget(bar, area);
}

fn render_qr_overlay(frame: &mut Frame, app: &App) {
    let popup = Popup::new(app.session.summary())
        .title(" QR ")
        .style(Style::default().fg(theme::OVERLAY_FG).bg(theme::OVERLAY_BG));
    frame.render_widget(popup, frame.area());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_default_slate() {
        let app = App::new(&Config::default());
        let text = screen(&app);
        assert!(text.contains("A001"));
        assert!(text.contains("(01 cam)"));
        assert!(text.contains("CAPTURE"));
    }

    #[test]
    fn test_renders_dual_mode_and_buffer() {
        let mut app = App::new(&Config::default());
        for c in "Sd99".chars() {
            app.feed(c);
        }
        let text = screen(&app);
        assert!(text.contains("02.001"));
        assert!(text.contains("editing prefix"));
        assert!(text.contains("CAPTURE | 99"));
    }

    #[test]
    fn test_shows_remembered_letter_while_cleared() {
        let mut app = App::new(&Config::default());
        assert!(screen(&app).contains("x:A"));

        for c in "cccx".chars() {
            app.feed(c);
        }
        assert_eq!(app.session.scene().letter(), None);
        assert!(screen(&app).contains("x:C"));

        app.feed('x');
        let text = screen(&app);
        assert!(text.contains("001C"));
        assert!(!text.contains("x:C"));
    }

    #[test]
    fn test_shows_wrap_ceiling() {
        let app = App::new(&Config::default());
        assert!(!screen(&app).contains("wraps after"));

        let config = Config::parse("[scene]\noverflow = { wrap = 901 }\n").unwrap();
        let app = App::new(&config);
        assert!(screen(&app).contains("wraps after 901"));
    }
}
