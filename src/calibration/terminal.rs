use std::io::{self, BufRead, Write};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
};

use super::boundary::{Answer, Boundary, Corner};
use super::session::{Feedback, FeedbackError};

/// Asks the person holding the phone, one key press per answer.
pub struct TerminalFeedback<R, W> {
    input: R,
    out: W,
}

impl TerminalFeedback<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self {
            input: io::stdin().lock(),
            out: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> TerminalFeedback<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    fn read_line(&mut self) -> Result<String, FeedbackError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(FeedbackError::Closed);
        }
        Ok(line.trim().to_lowercase())
    }
}

/// Leaves raw mode on drop, including on the error path.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

fn read_key() -> io::Result<KeyEvent> {
    let _raw = RawMode::enable()?;
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}

/// Ctrl-C does not raise a signal in raw mode, so it is checked here.
fn classify(key: &KeyEvent) -> Result<Option<char>, FeedbackError> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Err(FeedbackError::Interrupted)
        }
        KeyCode::Char(c) => Ok(Some(c)),
        _ => Ok(None),
    }
}

impl<R: BufRead, W: Write> Feedback for TerminalFeedback<R, W> {
    fn answer(&mut self, boundary: Boundary, at: i32) -> Result<Answer, FeedbackError> {
        writeln!(self.out, "Drawing test line at {boundary}={at}...")?;
        loop {
            write!(self.out, "Visible inside? (y/n/r=repeat/s=start over): ")?;
            self.out.flush()?;
            let key = read_key()?;
            let typed = classify(&key)?;
            writeln!(self.out, "{}", typed.unwrap_or(' '))?;
            if let Some(answer) = typed.and_then(Answer::from_key) {
                return Ok(answer);
            }
            writeln!(self.out, "Please answer 'y', 'n', 'r', or 's'")?;
        }
    }

    fn corner_cut_off(&mut self, corner: Corner) -> Result<bool, FeedbackError> {
        write!(self.out, "Is {corner} corner cut off? (y/n): ")?;
        self.out.flush()?;
        Ok(self.read_line()? == "y")
    }

    fn narrowed(&mut self, _boundary: Boundary, low: i32, high: i32) {
        let _ = writeln!(self.out, "Range narrowed to: {low} - {high}");
    }
}
