//! Terminal panel rendering.
//!
//! The panel is a bordered box with a fixed number of rows. The first frame
//! clears the screen; every later frame moves the cursor back to the panel's
//! top-left corner and overwrites it in place, so nothing scrolls. Error and
//! success frames have the same height, otherwise the cursor jump would land
//! on the wrong row after a transition.
use std::io::{self, Write};
use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::cursor::{MoveTo, MoveToColumn, MoveUp};
use crossterm::queue;
use crossterm::style::{Attribute, ResetColor, SetAttribute};
use crossterm::terminal::{Clear, ClearType};
use strum_macros::Display;
use ticker_common::Quote;
use ticker_common::style::{Palette, Style};

/// Rows occupied by every frame, borders included.
pub const PANEL_LINES: usize = 7;
/// Visible columns between the left and right border.
const INNER_WIDTH: usize = 43;
/// Left margin inside the border.
const MARGIN: &str = "  ";
const TITLE: &str = "TERMINAL MARKETS";

/// Direction of the latest price relative to the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Trend {
    /// No prior price or no current price.
    Neutral,
    /// Price rose.
    Up,
    /// Price fell.
    Down,
    /// Price unchanged.
    Flat,
}

impl Trend {
    /// Classify `quote` against `last_price`; `0.0` means there is no prior sample.
    pub fn between(last_price: f64, quote: Quote) -> Trend {
        match quote {
            Quote::Price(price) if last_price != 0.0 => {
                if price > last_price {
                    Trend::Up
                } else if price < last_price {
                    Trend::Down
                } else {
                    Trend::Flat
                }
            }
            _ => Trend::Neutral,
        }
    }

    /// Style of the price text for this trend.
    pub fn style(self) -> Style {
        match self {
            Trend::Neutral => Style::Bold,
            Trend::Up => Style::Green,
            Trend::Down => Style::Red,
            Trend::Flat => Style::Yellow,
        }
    }

    /// Single-column marker printed after the price.
    pub fn indicator(self) -> &'static str {
        match self {
            Trend::Neutral => " ",
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Flat => "−",
        }
    }
}

/// What the presenter remembers between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayState {
    /// Last valid price, `0.0` until the first one arrives.
    pub last_price: f64,
    /// Set until the first frame has been drawn.
    pub first_frame: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            last_price: 0.0,
            first_frame: true,
        }
    }
}

impl DisplayState {
    /// Record that a frame showing `quote` was drawn.
    pub fn advance(&mut self, quote: Quote) {
        if let Quote::Price(price) = quote {
            self.last_price = price;
        }
        self.first_frame = false;
    }
}

/// Outcome of one cycle as shown on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Price obtained this cycle, if any.
    pub quote: Quote,
    /// Direction relative to the previous valid price.
    pub trend: Trend,
    /// Time spent on fetch plus extraction.
    pub latency: Duration,
    /// Local time the frame was drawn.
    pub at: DateTime<Local>,
}

impl Frame {
    /// Latency in whole milliseconds, sub-millisecond part truncated.
    pub fn latency_ms(&self) -> u64 {
        self.latency.as_millis() as u64
    }

    /// `true` when the frame shows the connection error row instead of a price.
    pub fn is_error(&self) -> bool {
        !self.quote.is_available()
    }
}

/// Draws frames onto `out` and keeps the [`DisplayState`].
pub struct Presenter<W: Write> {
    out: W,
    palette: Palette,
    asset: &'static str,
    state: DisplayState,
}

impl<W: Write> Presenter<W> {
    /// Presenter writing to `out`, labelling the asset line with `asset`.
    pub fn new(out: W, palette: Palette, asset: &'static str) -> Self {
        Self {
            out,
            palette,
            asset,
            state: DisplayState::default(),
        }
    }

    /// State carried over to the next frame.
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    #[cfg(test)]
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Classify, draw and remember one quote.
    pub fn present(&mut self, quote: Quote, latency: Duration) -> io::Result<Frame> {
        let frame = Frame {
            quote,
            trend: Trend::between(self.state.last_price, quote),
            latency,
            at: Local::now(),
        };
        self.render(&frame)?;
        self.state.advance(quote);
        Ok(frame)
    }

    /// Leave the terminal with default attributes once the loop is over.
    pub fn finish(&mut self) -> io::Result<()> {
        if self.palette.is_enabled() {
            queue!(self.out, ResetColor, SetAttribute(Attribute::Reset))?;
        }
        self.out.flush()
    }

    fn render(&mut self, frame: &Frame) -> io::Result<()> {
        if self.state.first_frame {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        } else {
            queue!(self.out, MoveUp(PANEL_LINES as u16), MoveToColumn(0))?;
        }
        let mut buf = String::new();
        for line in self.compose(frame) {
            buf.push_str(&line);
            buf.push('\n');
        }
        self.out.write_all(buf.as_bytes())?;
        self.out.flush()
    }

    /// The panel rows for `frame`, without trailing newlines.
    fn compose(&self, frame: &Frame) -> [String; PANEL_LINES] {
        let clock = format!("  {}", frame.at.format("%H:%M:%S"));
        let (first, second) = match frame.quote {
            Quote::Price(price) => {
                let price_text = format!("${:.2} {}", price, frame.trend.indicator());
                (
                    self.row(&[(Style::Reset, "Asset:   "), (Style::Bold, self.asset)]),
                    self.row(&[(Style::Reset, "Price:   "), (frame.trend.style(), price_text.as_str())]),
                )
            }
            Quote::Unavailable => (
                self.row(&[(Style::Reset, "Status:  "), (Style::Red, "Connection Error!")]),
                self.row(&[]),
            ),
        };
        let latency = format!("{} ms", frame.latency_ms());

        [
            self.border('╭', '╮'),
            self.row(&[
                (Style::Cyan, TITLE),
                (Style::Gray, " (LIVE STATUS)"),
                (Style::Dim, clock.as_str()),
            ]),
            self.border('├', '┤'),
            first,
            second,
            self.row(&[(Style::Reset, "Latency: "), (Style::Dim, latency.as_str())]),
            self.border('╰', '╯'),
        ]
    }

    fn border(&self, left: char, right: char) -> String {
        let edge = format!("{}{}{}", left, "─".repeat(INNER_WIDTH), right);
        self.palette.paint(Style::Gray, &edge)
    }

    /// One bordered row, padded on the right to the panel width. Text that
    /// does not fit is cut and ends in `…`, so the right border never moves.
    fn row(&self, segments: &[(Style, &str)]) -> String {
        let mut line = self.palette.paint(Style::Gray, "│");
        line.push_str(MARGIN);
        let mut remaining = INNER_WIDTH - MARGIN.len();
        for (style, text) in segments {
            if remaining == 0 {
                break;
            }
            let len = text.chars().count();
            let shown: String = if len > remaining {
                text.chars().take(remaining - 1).chain(['…']).collect()
            } else {
                text.to_string()
            };
            remaining -= shown.chars().count();
            line.push_str(&self.palette.paint(*style, &shown));
        }
        line.push_str(&" ".repeat(remaining));
        line.push_str(&self.palette.paint(Style::Gray, "│"));
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::Command;

    fn ansi(command: impl Command) -> String {
        let mut out = String::new();
        command.write_ansi(&mut out).unwrap();
        out
    }

    fn clear_screen() -> String {
        ansi(Clear(ClearType::All)) + &ansi(MoveTo(0, 0))
    }

    fn rewind() -> String {
        ansi(MoveUp(PANEL_LINES as u16)) + &ansi(MoveToColumn(0))
    }

    fn visible_lines(text: &str) -> Vec<String> {
        text.replace(&clear_screen(), "")
            .replace(&rewind(), "")
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn presenter() -> Presenter<Vec<u8>> {
        Presenter::new(Vec::new(), Palette::PLAIN, "Bitcoin (BTC)")
    }

    fn output(p: &Presenter<Vec<u8>>) -> String {
        String::from_utf8(p.writer().clone()).unwrap()
    }

    #[test]
    fn trend_follows_sign_of_delta() {
        assert_eq!(Trend::between(100.0, Quote::Price(105.0)), Trend::Up);
        assert_eq!(Trend::between(105.0, Quote::Price(100.0)), Trend::Down);
        assert_eq!(Trend::between(100.0, Quote::Price(100.0)), Trend::Flat);
        assert_eq!(Trend::between(0.0, Quote::Price(100.0)), Trend::Neutral);
        assert_eq!(Trend::between(100.0, Quote::Unavailable), Trend::Neutral);
    }

    #[test]
    fn trend_styles() {
        assert_eq!(Trend::Up.style(), Style::Green);
        assert_eq!(Trend::Down.indicator(), "▼");
        assert_eq!(Trend::Neutral.indicator(), " ");
    }

    #[test]
    fn first_frame_clears_then_later_frames_rewind() {
        let mut p = presenter();
        p.present(Quote::Price(100.0), Duration::from_millis(12)).unwrap();
        let first = output(&p);
        assert!(first.starts_with(&clear_screen()));
        assert!(!p.state().first_frame);

        p.present(Quote::Price(101.0), Duration::from_millis(8)).unwrap();
        let second = &output(&p)[first.len()..];
        assert!(second.starts_with(&rewind()));
        assert!(!second.contains(&clear_screen()));
    }

    #[test]
    fn error_and_success_frames_have_the_same_height() {
        let mut p = presenter();
        let mut lens = Vec::new();
        for quote in [Quote::Price(100.0), Quote::Unavailable, Quote::Price(99.0)] {
            let before = output(&p).len();
            p.present(quote, Duration::ZERO).unwrap();
            let frame = output(&p)[before..].to_string();
            lens.push(frame.matches('\n').count());
        }
        assert_eq!(lens, vec![PANEL_LINES; 3]);
    }

    #[test]
    fn rows_share_one_width() {
        let mut p = presenter();
        p.present(Quote::Price(67123.45), Duration::from_millis(120)).unwrap();
        p.present(Quote::Unavailable, Duration::from_millis(3)).unwrap();
        for line in visible_lines(&output(&p)) {
            assert_eq!(line.chars().count(), INNER_WIDTH + 2, "{:?}", line);
        }
    }

    #[test]
    fn oversized_price_is_cut_to_panel_width() {
        let mut p = presenter();
        p.present(Quote::Price(1.0), Duration::ZERO).unwrap();
        p.present(Quote::Price(1e40), Duration::ZERO).unwrap();
        let lines = visible_lines(&output(&p));
        assert_eq!(lines.len(), 2 * PANEL_LINES);
        for line in &lines {
            assert_eq!(line.chars().count(), INNER_WIDTH + 2, "{:?}", line);
        }
        let price_row = &lines[PANEL_LINES + 4];
        assert!(price_row.starts_with("│  Price:   $1000"));
        assert!(price_row.ends_with("…│"));
    }

    #[test]
    fn success_frame_content() {
        let mut p = presenter();
        p.present(Quote::Price(100.0), Duration::ZERO).unwrap();
        let before = output(&p).len();
        let frame = p.present(Quote::Price(95.5), Duration::from_micros(4_900)).unwrap();
        let text = output(&p)[before..].to_string();
        assert_eq!(frame.trend, Trend::Down);
        assert_eq!(frame.latency_ms(), 4);
        assert!(text.contains("Asset:   Bitcoin (BTC)"));
        assert!(text.contains("Price:   $95.50 ▼"));
        assert!(text.contains("Latency: 4 ms"));
    }

    #[test]
    fn unavailable_keeps_last_price() {
        let mut p = presenter();
        p.present(Quote::Price(100.0), Duration::ZERO).unwrap();
        let frame = p.present(Quote::Unavailable, Duration::ZERO).unwrap();
        assert!(frame.is_error());
        assert_eq!(frame.trend, Trend::Neutral);
        assert_eq!(p.state().last_price, 100.0);
        assert!(output(&p).contains("Status:  Connection Error!"));
    }

    #[test]
    fn colored_frame_uses_trend_style() {
        let mut p = Presenter::new(Vec::new(), Palette::COLOR, "Bitcoin (BTC)");
        p.present(Quote::Price(100.0), Duration::ZERO).unwrap();
        p.present(Quote::Price(105.0), Duration::ZERO).unwrap();
        let text = String::from_utf8(p.writer().clone()).unwrap();
        assert!(text.contains(&Palette::COLOR.paint(Style::Green, "$105.00 ▲")));
    }
}
