use dirview::config::AppConfig;
use dirview::host::Host;
use dirview::logging;
use dirview::traits::FolderError;
use dirview::ui::MainView;
use dirview::viewmodel::{MainViewModel, SharedViewModel, ViewModelLocator};

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Messages received from async operations (fetch completion)
#[derive(Debug)]
enum AppMessage {
    RefreshFinished(Result<(), FolderError>),
}

fn main() -> Result<()> {
    color_eyre::install()?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let config = AppConfig::load()?;
    logging::init(&config)?;
    tracing::info!(root = %config.root.display(), "configuration loaded");

    // Tokio runtime for the eager fetch and the TUI event loop
    let runtime = tokio::runtime::Runtime::new()?;

    let mut host = Host::build(&config)?;
    host.start();

    // Activation: the locator resolves the view model and runs the initial
    // fetch; the main view comes out of the registry afterwards. Failures
    // here are fatal and surface before the terminal is taken over.
    let registry = host.registry();
    let locator = ViewModelLocator::new(registry.clone());
    let view_model = match runtime.block_on(locator.main_view_model()) {
        Ok(view_model) => view_model,
        Err(err) => {
            host.shutdown();
            return Err(err.into());
        }
    };
    let view = match registry.resolve::<MainView>() {
        Ok(view) => view,
        Err(err) => {
            host.shutdown();
            return Err(err.into());
        }
    };

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = runtime.block_on(run_app(&mut terminal, view, view_model));

    restore_terminal(&mut terminal)?;
    host.shutdown();

    result
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = execute!(io::stdout(), Show);
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Index of the selected folder inside the current collection, if the
/// selection is still a member of it.
fn selected_index(view_model: &MainViewModel) -> Option<usize> {
    view_model
        .selected_folder()
        .and_then(|selected| view_model.folders().iter().position(|f| f == selected))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    view: MainView,
    view_model: SharedViewModel,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();
    let (message_tx, mut message_rx) = mpsc::unbounded_channel::<AppMessage>();

    // Redraw whenever the view model announces a change
    let needs_redraw = Arc::new(AtomicBool::new(true));
    {
        let mut vm = view_model.lock().await;
        let folders_flag = needs_redraw.clone();
        vm.on_folders_changed(move |_| folders_flag.store(true, Ordering::SeqCst));
        let selection_flag = needs_redraw.clone();
        vm.on_selection_changed(move |_| selection_flag.store(true, Ordering::SeqCst));
    }

    let refresh_command = MainViewModel::refresh_command(&view_model);

    loop {
        // Draw the UI only when needed
        if needs_redraw.swap(false, Ordering::SeqCst) {
            let vm = view_model.lock().await;
            terminal.draw(|frame| view.render(frame, &vm))?;
        }

        tokio::select! {
            // Handle keyboard events
            event_result = event_stream.next() => {
                // A drained stream means the input side is gone; leave
                // instead of spinning on it.
                let Some(event_result) = event_result else {
                    return Ok(());
                };
                if let Ok(event) = event_result {
                    match event {
                        Event::Resize(_, _) => {
                            needs_redraw.store(true, Ordering::SeqCst);
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            match key.code {
                                KeyCode::Char('c')
                                    if key.modifiers.contains(KeyModifiers::CONTROL) =>
                                {
                                    return Ok(());
                                }
                                KeyCode::Char('q') => {
                                    return Ok(());
                                }
                                KeyCode::Up => {
                                    move_selection(&view_model, -1).await;
                                }
                                KeyCode::Down => {
                                    move_selection(&view_model, 1).await;
                                }
                                KeyCode::Char('r') => {
                                    // Spawn the fetch; the result comes back
                                    // over the message channel. Overlapping
                                    // refreshes run independently; the last
                                    // to complete wins.
                                    if refresh_command.can_execute() {
                                        let future = refresh_command.execute();
                                        let sender = message_tx.clone();
                                        tokio::spawn(async move {
                                            let _ = sender
                                                .send(AppMessage::RefreshFinished(future.await));
                                        });
                                    }
                                }
                                _ => {}
                            }
                        }
                        _ => {}
                    }
                }
            }

            // Handle fetch completions
            message = message_rx.recv() => {
                if let Some(AppMessage::RefreshFinished(result)) = message {
                    // Nothing is caught here: a failed fetch ends the loop
                    // and propagates to the ambient handler in main.
                    result?;
                }
            }
        }
    }
}

/// Move the selection by `delta` within the current collection, clamped to
/// its bounds. Selecting is a view-model mutation; the observable takes
/// care of scheduling the redraw.
async fn move_selection(view_model: &SharedViewModel, delta: isize) {
    let mut vm = view_model.lock().await;
    let folders = vm.folders().to_vec();
    if folders.is_empty() {
        return;
    }

    let next = match selected_index(&vm) {
        Some(index) => {
            if delta < 0 {
                index.saturating_sub(delta.unsigned_abs())
            } else {
                (index + delta as usize).min(folders.len() - 1)
            }
        }
        None => 0,
    };

    vm.select(Some(folders[next].clone()));
}
