//! Terminal demo for folio-term.
//!
//! Runs a session in a raw-mode terminal. There is no browser, so deferred
//! actions are shown in a status line instead of navigating anywhere.
//!
//! To run:
//! ```bash
//! cargo run --features cli -- [content.toml] [--rich]
//! ```
//!
//! `RUST_LOG` controls log output on stderr (default: `warn`).

use anyhow::Context as _;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{self, Stylize};
use crossterm::terminal::{self, ClearType, disable_raw_mode, enable_raw_mode};
use crossterm::{cursor, execute, queue};
use folio_term::{
    Content, DefaultConfig, Host, Key, RecordKind, RichConfig, Session, SessionConfig,
};
use std::cell::Cell;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

// =============================================================================
// Terminal Raw Mode Guard
// =============================================================================

/// Enables raw mode on creation and restores the terminal on drop, even on
/// error or panic.
struct RawModeGuard;

impl RawModeGuard {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

// =============================================================================
// Host
// =============================================================================

#[derive(Debug, Default)]
struct TerminalHost {
    status: Option<String>,
}

impl Host for TerminalHost {
    fn navigate(&mut self, path: &str) {
        self.status = Some(format!("(would navigate to {})", path));
    }

    fn open_external(&mut self, url: &str) {
        self.status = Some(format!("(would open {} in a new tab)", url));
    }

    fn wall_clock(&self) -> Option<i64> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .ok()
            .and_then(|elapsed| i64::try_from(elapsed.as_secs()).ok())
    }

    fn entropy(&mut self) -> Option<u32> {
        getrandom::u32().ok()
    }
}

// =============================================================================
// Input
// =============================================================================

enum Input {
    Key(Key),
    Quit,
}

fn map_key(event: KeyEvent) -> Option<Input> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let key = match event.code {
        KeyCode::Char('c') | KeyCode::Char('d') if ctrl => return Some(Input::Quit),
        KeyCode::Char(c) if !ctrl => Key::Char(c),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Esc => Key::Escape,
        _ => return None,
    };
    Some(Input::Key(key))
}

/// Read terminal events on a plain thread; `event::read` blocks.
fn spawn_reader() -> mpsc::UnboundedReceiver<Input> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if let Some(input) = map_key(key)
                        && tx.send(input).is_err()
                    {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "reading terminal events failed");
                    let _ = tx.send(Input::Quit);
                    break;
                }
            }
        }
    });
    rx
}

// =============================================================================
// Rendering
// =============================================================================

fn render<C: SessionConfig>(
    out: &mut impl Write,
    session: &Session<TerminalHost, C>,
) -> io::Result<()> {
    let mut lines: Vec<String> = session.welcome().to_vec();
    lines.push(String::new());
    for record in session.log().records() {
        match (&record.kind, &record.animation) {
            (RecordKind::Parrot, Some(animation)) => {
                lines.push(format!("[{} animation]", animation.0));
            }
            _ => lines.extend(record.lines.iter().cloned()),
        }
    }
    if let Some(status) = &session.host().status {
        lines.push(status.clone());
    }

    let (_, rows) = terminal::size()?;
    let keep = usize::from(rows.saturating_sub(1));
    let start = lines.len().saturating_sub(keep);

    queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    for line in &lines[start..] {
        queue!(out, style::Print(line), style::Print("\r\n"))?;
    }

    queue!(out, style::Print(session.prompt()), style::Print(" "))?;
    match session.placeholder() {
        Some(placeholder) => queue!(
            out,
            cursor::SavePosition,
            style::PrintStyledContent(style::style(placeholder).dark_grey()),
            cursor::RestorePosition
        )?,
        None => queue!(out, style::Print(session.input()))?,
    }
    out.flush()
}

// =============================================================================
// Main
// =============================================================================

struct Options {
    content: Option<PathBuf>,
    rich: bool,
}

fn parse_args() -> Options {
    let mut options = Options {
        content: None,
        rich: false,
    };
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--rich" => options.rich = true,
            _ => options.content = Some(PathBuf::from(arg)),
        }
    }
    options
}

fn load_content(path: Option<&Path>) -> anyhow::Result<Content> {
    let Some(path) = path else {
        return Ok(Content::default());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let content = Content::from_toml_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    tracing::info!(path = %path.display(), "content loaded");
    Ok(content)
}

async fn run<C: SessionConfig>(content: Content) -> anyhow::Result<()> {
    let mut session: Session<TerminalHost, C> = Session::new(content, TerminalHost::default());

    let dirty = Rc::new(Cell::new(true));
    let flag = dirty.clone();
    session.subscribe(move |_| flag.set(true));

    let mut keys = spawn_reader();
    let _raw_mode_guard = RawModeGuard::new()?;
    let mut stdout = io::stdout();

    session.mount();
    let mut ticker = tokio::time::interval(Duration::from_millis(C::TYPIST_TICK_MS));
    let mut last = Instant::now();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let now = Instant::now();
                let elapsed = u64::try_from(now.duration_since(last).as_millis()).unwrap_or(u64::MAX);
                session.advance(elapsed);
                last = now;
            }
            input = keys.recv() => match input {
                Some(Input::Key(key)) => {
                    session.press(key);
                }
                Some(Input::Quit) | None => break,
            },
        }

        if dirty.replace(false) {
            render(&mut stdout, &session)?;
        }
    }

    session.unmount();
    execute!(stdout, style::Print("\r\n"))?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let options = parse_args();
    let content = load_content(options.content.as_deref())?;

    if options.rich {
        run::<RichConfig>(content).await
    } else {
        run::<DefaultConfig>(content).await
    }
}
