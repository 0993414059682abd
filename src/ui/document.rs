use ratatui::{
    prelude::*,
    widgets::{Block as Panel, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::export::{AnswerBlock, Block, QuestionBlock};
use crate::models::OPTION_LABELS;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_document(frame, chunks[1], app);
    render_controls(frame, chunks[2]);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let progress = format!(
        "{} questions  ·  line {}/{}",
        app.question_count(),
        app.scroll() + 1,
        app.total_lines()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_document(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();
    for (index, block) in app.blocks().iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(block_lines(block));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Panel::default()
                .borders(Borders::TOP)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        )
        .scroll((app.scroll() as u16, 0));
    frame.render_widget(widget, area);
}

fn block_lines(block: &Block) -> Vec<Line<'static>> {
    match block {
        Block::Title(text) => vec![Line::from(Span::styled(
            text.clone(),
            Style::default().fg(Color::Cyan).bold(),
        ))
        .alignment(Alignment::Center)],
        Block::CategoryHeading(name) => vec![Line::from(Span::styled(
            name.clone(),
            Style::default().fg(Color::Yellow).bold(),
        ))],
        Block::Question(question) => question_lines(question),
    }
}

fn labeled(label: &'static str, text: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{} ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(text.to_string(), Style::default().fg(Color::Gray)),
    ])
}

fn question_lines(question: &QuestionBlock) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            question.heading(),
            Style::default().fg(Color::White).bold(),
        )),
        labeled("Question:", &question.content),
    ];

    match &question.answer {
        AnswerBlock::Classic(text) => lines.push(labeled("Answer:", text)),
        AnswerBlock::MultipleChoice { options, correct } => {
            lines.push(Line::from("Options:".fg(Color::DarkGray)));
            for (label, option) in OPTION_LABELS.iter().zip(options) {
                let style = if label == correct {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Gray)
                };
                lines.push(Line::from(Span::styled(
                    format!("  {}. {}", label, option),
                    style,
                )));
            }
            lines.push(labeled("Correct answer:", &correct.to_string()));
        }
    }

    lines
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  g/G top/bottom  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
