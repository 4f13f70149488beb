use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use dino_runner::input::{map_key, AppInput};
use dino_runner::{on_jump_signal, ui, GameLoop, Tuning, INPUT_POLL_MS};
use ratatui::backend::Backend;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

const LOG_FILE_NAME: &str = "dino-runner.log";

fn main() -> io::Result<()> {
    init_logging();
    log::info!("Dino Runner starting");

    let mut terminal = setup_terminal()?;

    let result = run(&mut terminal);

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("Terminal error: {}", e);
    }
    result
}

/// Raw mode plus alternate screen. If anything after raw mode fails the
/// terminal is put back before the error is returned.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let entered = io::stdout()
        .execute(EnterAlternateScreen)
        .and_then(|_| Terminal::new(CrosstermBackend::new(io::stdout())));
    or_restore(entered, || {
        let _ = io::stdout().execute(LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })
}

/// Run `restore` before handing an error back. `Ok` passes straight through.
fn or_restore<T>(result: io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    result.map_err(|e| {
        restore();
        e
    })
}

/// Log to a file in the temp dir; stderr would draw over the alternate screen.
/// If the file cannot be created the game runs without logging.
fn init_logging() {
    let path = std::env::temp_dir().join(LOG_FILE_NAME);
    let Ok(file) = File::create(&path) else {
        return;
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

/// Event loop: the single owner of the game. Input and both timers are
/// handled one after another, so no locking is needed.
fn run<B: Backend>(terminal: &mut Terminal<B>) -> io::Result<()> {
    let mut game = GameLoop::new(Tuning::default());
    let mut rng = rand::thread_rng();
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, game.state()))?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                match map_key(key_event) {
                    AppInput::Action => {
                        let effect = on_jump_signal(&mut game);
                        log::debug!("Action signal: {:?}", effect);
                    }
                    AppInput::Quit => break,
                    AppInput::Other => {}
                }
            }
        }

        // Only whole milliseconds are consumed; the remainder carries over
        let dt_ms = last_frame.elapsed().as_millis() as u64;
        last_frame += Duration::from_millis(dt_ms);
        game.advance(dt_ms, &mut rng);
    }

    log::info!("Display closed, last score {}", game.state().score);
    Ok(())
}
