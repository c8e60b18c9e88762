//! Terminal rendering of conversation messages.
//!
//! `ChatRenderer` prints a header line per message (avatar, speaker, time)
//! followed by the body. Assistant answers go through `termimad`; fenced
//! code blocks (the backend likes to quote SQL) are highlighted with
//! `syntect`.

use chrono::{DateTime, Local, TimeZone, Utc};
use crossterm::style::Color;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Style, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::as_24_bit_terminal_escaped;
use termimad::MadSkin;

use vgchat_types::chat::{ChatMessage, MessageOrigin};

/// Vendor accent (the widget's cyan gradient).
pub const ACCENT: Color = Color::Rgb { r: 0, g: 212, b: 255 };

/// Label used for the user's own messages.
const USER_LABEL: &str = "Bạn";

/// Format a timestamp as `HH:MM` in the given zone.
pub fn format_time<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(tz).format("%H:%M").to_string()
}

/// Split an answer into prose and fenced code segments.
#[derive(Debug, PartialEq)]
pub enum Segment<'a> {
    Prose(&'a str),
    Code { lang: String, code: String },
}

pub fn split_segments(markdown: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut in_code_block = false;
    let mut code_lang = String::new();
    let mut code_buf = String::new();

    for line in markdown.lines() {
        if line.trim_start().starts_with("```") {
            if in_code_block {
                segments.push(Segment::Code {
                    lang: std::mem::take(&mut code_lang),
                    code: std::mem::take(&mut code_buf),
                });
            } else {
                code_lang = line.trim_start().trim_start_matches('`').trim().to_string();
                code_buf.clear();
            }
            in_code_block = !in_code_block;
        } else if in_code_block {
            code_buf.push_str(line);
            code_buf.push('\n');
        } else {
            segments.push(Segment::Prose(line));
        }
    }

    // Unclosed fence: still show what we have as code.
    if in_code_block && !code_buf.is_empty() {
        segments.push(Segment::Code {
            lang: code_lang,
            code: code_buf,
        });
    }

    segments
}

/// Terminal renderer for conversation messages.
pub struct ChatRenderer {
    skin: MadSkin,
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    assistant_name: String,
    show_timestamps: bool,
}

impl ChatRenderer {
    pub fn new(assistant_name: &str, show_timestamps: bool) -> Self {
        let mut skin = MadSkin::default_dark();

        let tc = Self::crossterm_to_termimad(ACCENT);
        skin.bold.set_fg(tc);
        skin.headers[0].set_fg(tc);
        skin.headers[1].set_fg(tc);
        skin.inline_code
            .set_fg(termimad::crossterm::style::Color::Yellow);

        Self {
            skin,
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            assistant_name: assistant_name.to_string(),
            show_timestamps,
        }
    }

    pub fn assistant_name(&self) -> &str {
        &self.assistant_name
    }

    /// Print one message: header line, then body.
    pub fn print_message(&self, message: &ChatMessage) {
        println!();
        println!("  {}", self.header(message));
        match message.origin {
            MessageOrigin::User => {
                for line in message.text.lines() {
                    println!("  {line}");
                }
            }
            MessageOrigin::Assistant => {
                print!("{}", self.render_answer(&message.text));
            }
        }
        println!();
    }

    /// Print every message in order.
    pub fn print_history(&self, messages: &[ChatMessage]) {
        for message in messages {
            self.print_message(message);
        }
    }

    fn header(&self, message: &ChatMessage) -> String {
        let (avatar, speaker) = match message.origin {
            MessageOrigin::User => ("👤", console::style(USER_LABEL).green().bold()),
            MessageOrigin::Assistant => (
                "🤖",
                console::style(self.assistant_name.as_str()).cyan().bold(),
            ),
        };

        if self.show_timestamps {
            let time = format_time(&message.sent_at, &Local);
            format!("{avatar} {speaker} {}", console::style(time).dim())
        } else {
            format!("{avatar} {speaker}")
        }
    }

    /// Render an answer: prose through termimad, code fences through syntect.
    pub fn render_answer(&self, markdown: &str) -> String {
        let mut output = String::new();
        for segment in split_segments(markdown) {
            match segment {
                Segment::Prose(line) => {
                    output.push_str(&format!("{}", self.skin.term_text(line)));
                }
                Segment::Code { lang, code } => {
                    output.push_str(&self.highlight_code(&code, &lang));
                }
            }
        }
        output
    }

    /// Highlight a code block using syntect.
    fn highlight_code(&self, code: &str, lang: &str) -> String {
        let syntax = if lang.is_empty() {
            self.syntax_set.find_syntax_plain_text()
        } else {
            self.syntax_set
                .find_syntax_by_token(lang)
                .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
        };

        let theme = &self.theme_set.themes["base16-ocean.dark"];
        let mut h = HighlightLines::new(syntax, theme);

        let mut output = String::new();
        output.push_str(&format!("  {}\n", console::style(format!("--- {lang} ---")).dim()));

        for line in code.lines() {
            let ranges: Vec<(Style, &str)> = h
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_default();
            let escaped = as_24_bit_terminal_escaped(&ranges[..], false);
            output.push_str(&format!("  {escaped}\x1b[0m\n"));
        }

        output
    }

    /// Convert a crossterm Color to termimad Color.
    fn crossterm_to_termimad(color: Color) -> termimad::crossterm::style::Color {
        match color {
            Color::Cyan => termimad::crossterm::style::Color::Cyan,
            Color::Blue => termimad::crossterm::style::Color::Blue,
            Color::Rgb { r, g, b } => termimad::crossterm::style::Color::Rgb { r, g, b },
            _ => termimad::crossterm::style::Color::Cyan,
        }
    }
}
