//! Terminal shim and entry point.
//!
//! This is the thin integration layer between the notepick library and the
//! terminal: it validates configuration before any input is read, owns the
//! raw-mode/alternate-screen lifecycle, translates crossterm key events into
//! library events, and executes the actions the handler returns.
//!
//! # Session Lifecycle
//!
//! 1. Load configuration, initialize tracing
//! 2. Refuse to start without an `EDITOR` (guidance on stderr, exit 2)
//! 3. Scan the working directory into the initial state (failure: exit 1)
//! 4. Enter raw mode + alternate screen, loop: render → read key → handle
//! 5. On `OpenFile`: restore the terminal, run the editor, exit with its
//!    code; on `Quit`: exit 0
//!
//! # Keybindings
//!
//! Normal mode: arrows, Enter, `/`, `Ctrl+n`, `Ctrl+d`, `q`.
//! Search/CreateNote: printable characters feed the buffer, Backspace edits,
//! Enter submits, ESC cancels. `Ctrl+c` quits from any mode.

use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};
use std::io;

use notepick::{
    handle_event, ui, Action, AppState, CommandEditor, Config, EditorLauncher, Event, InputMode,
    NotepickError, Result,
};

/// How an interactive session ended.
enum Outcome {
    /// User quit without opening anything.
    Quit,
    /// A file was handed to the editor, which exited with this code.
    Opened(i32),
}

fn main() {
    std::process::exit(run());
}

/// Runs the program and returns the process exit code.
fn run() -> i32 {
    let config = Config::load();
    notepick::observability::init_tracing(&config);

    let Some(editor_command) = config.editor.clone() else {
        eprintln!("Error: No text editor configured");
        eprintln!("Set your default editor, e.g.: export EDITOR=micro");
        eprintln!("Then restart your shell or run: source ~/.zshrc");
        return 2;
    };

    let editor = match CommandEditor::new(editor_command) {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Error: {e}");
            return 2;
        }
    };

    let start_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: cannot determine working directory: {e}");
            return 1;
        }
    };

    let mut state = match notepick::initialize(&config, start_dir) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    match run_session(&mut state, &editor) {
        Ok(Outcome::Quit) => 0,
        Ok(Outcome::Opened(code)) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

/// Runs the blocking event loop until the session ends.
///
/// The loop is single-threaded and cooperative: it clamps scroll to the
/// current terminal size, renders a frame, blocks on the next terminal
/// event, and handles it to completion. Resize events simply fall through to
/// the next frame.
fn run_session(state: &mut AppState, editor: &dyn EditorLauncher) -> Result<Outcome> {
    let mut terminal = TerminalGuard::enter()?;

    loop {
        let (cols, rows) = crossterm::terminal::size()
            .map_err(|e| NotepickError::Terminal(e.to_string()))?;
        let (cols, rows) = (cols as usize, rows as usize);

        state.clamp_scroll(state.visible_rows(rows));
        ui::render(state, rows, cols);

        match event::read().map_err(|e| NotepickError::Terminal(e.to_string()))? {
            TermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                let Some(app_event) = map_key_event(state.input_mode, &key) else {
                    continue;
                };

                let (_should_render, actions) = handle_event(state, &app_event)?;
                for action in actions {
                    match action {
                        Action::Quit => return Ok(Outcome::Quit),
                        Action::OpenFile { path } => {
                            // Release the terminal before the editor takes over.
                            terminal.restore();
                            let code = editor.open(&path)?;
                            return Ok(Outcome::Opened(code));
                        }
                    }
                }
            }
            TermEvent::Resize(..) => {}
            _ => {}
        }
    }
}

/// Maps a terminal key event to a library event, honoring the active mode.
///
/// `q`, `/`, `Ctrl+n` and `Ctrl+d` exist only in Normal mode; printable
/// characters reach the buffers only in the text-input modes. Unmapped keys
/// return `None` and are ignored.
fn map_key_event(mode: InputMode, key: &KeyEvent) -> Option<Event> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Event::Quit),
            KeyCode::Char('n') if mode == InputMode::Normal => Some(Event::NoteMode),
            KeyCode::Char('d') if mode == InputMode::Normal => Some(Event::DailyNote),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some(Event::KeyUp),
        KeyCode::Down => Some(Event::KeyDown),
        KeyCode::Enter => Some(Event::Select),
        KeyCode::Esc => Some(Event::Escape),
        KeyCode::Backspace => Some(Event::Backspace),
        KeyCode::Char('q') if mode == InputMode::Normal => Some(Event::Quit),
        KeyCode::Char('/') if mode == InputMode::Normal => Some(Event::SearchMode),
        KeyCode::Char(c) if mode.has_input_bar() => Some(Event::Char(c)),
        _ => None,
    }
}

/// RAII guard for raw mode and the alternate screen.
///
/// `restore` is idempotent and also runs on drop, so the terminal comes back
/// even when the loop unwinds with an error.
struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Enables raw mode, enters the alternate screen and hides the cursor.
    ///
    /// # Errors
    ///
    /// Returns a `Terminal` error when the terminal cannot be set up; this
    /// is fatal and happens before any UI is drawn.
    fn enter() -> Result<Self> {
        enable_raw_mode().map_err(|e| NotepickError::Terminal(e.to_string()))?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)
            .map_err(|e| NotepickError::Terminal(e.to_string()))?;
        Ok(Self { active: true })
    }

    /// Leaves the alternate screen and disables raw mode.
    fn restore(&mut self) {
        if self.active {
            let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            self.active = false;
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}
