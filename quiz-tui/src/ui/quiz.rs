//! Screens for each session status

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use libquiz::session::{format_clock, NextControl};
use libquiz::Status;

use super::fg;
use crate::app::AppState;

pub fn render_screen(frame: &mut Frame, area: Rect, state: &AppState) {
    match state.session.status {
        Status::Loading => render_loading(frame, area, state),
        Status::Ready if state.session.questions.is_empty() && state.is_fetching() => {
            render_loading(frame, area, state)
        }
        Status::Error => render_fetch_error(frame, area, state),
        Status::Ready => render_start(frame, area, state),
        Status::Active => render_question(frame, area, state),
        Status::Finished => render_finish(frame, area, state),
    }
}

/// Keys that do something on the current screen
pub fn hint_line(state: &AppState) -> String {
    let session = &state.session;
    match session.status {
        Status::Loading => "F1: Help | q: Quit".to_string(),
        Status::Error => "r: Retry | F1: Help | q: Quit".to_string(),
        Status::Ready if state.can_start() => {
            "0-9: Limit | d: Difficulty | Enter: Start | F1: Help | q: Quit".to_string()
        }
        Status::Ready => "r: Reload | F1: Help | q: Quit".to_string(),
        Status::Active if session.is_empty_session() => "Enter: Finish | q: Quit".to_string(),
        Status::Active => match session.next_control() {
            NextControl::Hidden => "Up/Down: Move | 1-9/Enter: Answer | q: Quit".to_string(),
            NextControl::Advance => "Enter/n: Next | q: Quit".to_string(),
            NextControl::Finish => "Enter/n: Finish | q: Quit".to_string(),
        },
        Status::Finished => "r: Restart | q: Quit".to_string(),
    }
}

fn centered_text(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line>) {
    let widget = Paragraph::new(lines)
        .block(Block::default().title(format!(" {} ", title)).borders(Borders::ALL))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn render_loading(frame: &mut Frame, area: Rect, state: &AppState) {
    centered_text(
        frame,
        area,
        "Quiz",
        vec![
            Line::from(""),
            Line::from(Span::styled("Loading questions...", fg(state, Color::Yellow))),
        ],
    );
}

fn render_fetch_error(frame: &mut Frame, area: Rect, state: &AppState) {
    let marker = if state.config.unicode_enabled { "💥 " } else { "" };
    centered_text(
        frame,
        area,
        "Quiz",
        vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{}There was an error fetching questions.", marker),
                fg(state, Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Press r to try again"),
        ],
    );
}

fn render_start(frame: &mut Frame, area: Rect, state: &AppState) {
    let session = &state.session;
    let count = session.num_questions();

    if count == 0 {
        centered_text(
            frame,
            area,
            "Quiz",
            vec![
                Line::from(""),
                Line::from("The question pool is empty."),
                Line::from(""),
                Line::from("Press r to reload"),
            ],
        );
        return;
    }

    let limit = if state.limit_input.is_empty() {
        Span::styled("all", fg(state, Color::DarkGray))
    } else {
        Span::styled(state.limit_input.clone(), fg(state, Color::Cyan))
    };
    let playing = session.selected_questions_limit.unwrap_or(count);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to the Quiz!",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{} questions to test your knowledge", count)),
        Line::from(""),
        Line::from(vec![
            Span::raw("Questions: "),
            limit,
            Span::raw(format!("  (up to {})", playing)),
        ]),
        Line::from(vec![
            Span::raw("Difficulty: "),
            Span::styled(session.difficulty.to_string(), fg(state, Color::Cyan)),
        ]),
        Line::from(format!(
            "Time: {} per question",
            format_clock(session.settings.seconds_per_question)
        )),
        Line::from(""),
        Line::from(Span::styled("Press Enter to start", fg(state, Color::Green))),
    ];

    centered_text(frame, area, "Quiz", lines);
}

fn render_question(frame: &mut Frame, area: Rect, state: &AppState) {
    let session = &state.session;

    let Some(question) = session.current_question() else {
        centered_text(
            frame,
            area,
            "Quiz",
            vec![
                Line::from(""),
                Line::from("No questions match your choices."),
                Line::from(""),
                Line::from("Press Enter to finish"),
            ],
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress
            Constraint::Min(4),    // Question and options
            Constraint::Length(3), // Timer and next control
        ])
        .split(area);

    // Progress
    let (done, total) = session.progress();
    let ratio = if total == 0 { 0.0 } else { done as f64 / total as f64 };
    let label = format!(
        "Question {}/{}  |  {}/{} points",
        session.index + 1,
        total,
        session.points,
        session.max_possible_points()
    );
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(fg(state, Color::Cyan))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(label);
    frame.render_widget(gauge, chunks[0]);

    // Question and options
    let (tick, cross) = if state.config.unicode_enabled { ("✓", "✗") } else { ("+", "x") };
    let mut lines = vec![
        Line::from(Span::styled(
            question.text.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (i, option) in question.options.iter().enumerate() {
        let text = format!("{}. {}", i + 1, option);
        let line = match session.answer {
            Some(chosen) if i == question.correct_option => Line::from(vec![
                Span::styled(format!("{} ", tick), fg(state, Color::Green)),
                Span::styled(
                    text,
                    fg(state, Color::Green).add_modifier(if i == chosen {
                        Modifier::BOLD
                    } else {
                        Modifier::empty()
                    }),
                ),
            ]),
            Some(chosen) if i == chosen => Line::from(vec![
                Span::styled(format!("{} ", cross), fg(state, Color::Red)),
                Span::styled(text, fg(state, Color::Red).add_modifier(Modifier::BOLD)),
            ]),
            Some(_) => Line::from(vec![
                Span::raw("  "),
                Span::styled(text, fg(state, Color::DarkGray)),
            ]),
            None if i == state.cursor => Line::from(vec![
                Span::raw("> "),
                Span::styled(text, Style::default().add_modifier(Modifier::REVERSED)),
            ]),
            None => Line::from(vec![Span::raw("  "), Span::raw(text)]),
        };
        lines.push(line);
    }
    let body = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} points | {} ", question.points, question.difficulty))
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(body, chunks[1]);

    // Timer and next control
    let seconds = session.seconds_remaining.unwrap_or(0);
    let timer_color = if seconds <= 10 { Color::Red } else { Color::Reset };
    let control = match session.next_control() {
        NextControl::Hidden => String::new(),
        NextControl::Advance => "Next (Enter)".to_string(),
        NextControl::Finish => "Finish (Enter)".to_string(),
    };
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(format_clock(seconds), fg(state, timer_color).add_modifier(Modifier::BOLD)),
        Span::raw("    "),
        Span::styled(control, fg(state, Color::Green)),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, chunks[2]);
}

fn render_finish(frame: &mut Frame, area: Rect, state: &AppState) {
    let session = &state.session;
    let emoji = if state.config.unicode_enabled {
        format!("{} ", session.rating().emoji())
    } else {
        String::new()
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{}You scored {} out of {} ({}%)",
                emoji,
                session.points,
                session.max_possible_points(),
                session.percentage()
            ),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("(Highscore: {} points)", session.high_score)),
        Line::from(""),
        Line::from(Span::styled("Press r to restart", fg(state, Color::Green))),
    ];

    centered_text(frame, area, "Finished", lines);
}
