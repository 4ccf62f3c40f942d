//! Help output styling, amber headings to match the slate readout

use clap::builder::styling::{AnsiColor, Color, Style, Styles};

const HEADING: Style = Style::new()
    .bold()
    .fg_color(Some(Color::Ansi(AnsiColor::BrightYellow)));

pub fn get_styles() -> Styles {
    Styles::styled()
        .usage(HEADING)
        .header(HEADING.underline())
        .literal(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
        )
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack))))
        .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
        .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))))
        .error(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
}
