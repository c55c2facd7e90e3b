use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use jungle_run::build_info;
use jungle_run::constants::FRAME_INTERVAL_MS;
use jungle_run::game::{process_input, tick_run, Difficulty, RunOutcome, RunnerGame, RunnerInput};
use jungle_run::input::{handle_home_key, handle_run_key, HomeAction, RunAction};
use jungle_run::records::Records;
use jungle_run::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

enum Screen {
    Home,
    Run,
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "jungle-run {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Jungle Run - Terminal Side-Scrolling Arcade Game\n");
                println!("Usage: jungle-run\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'jungle-run --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let mut records = Records::load();
    let mut selected_index: usize = 1; // Normal
    let mut current_screen = Screen::Home;
    let mut game = RunnerGame::new(Difficulty::from_index(selected_index));
    let mut result_recorded = false;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Monotonic clock for jump timestamps and frame deltas
    let clock = Instant::now();
    let mut last_frame = Instant::now();
    let mut rng = rand::thread_rng();

    // Main loop
    'main: loop {
        match current_screen {
            Screen::Home => {
                let selected = Difficulty::from_index(selected_index);
                terminal.draw(|f| {
                    ui::render_home_scene(f, f.size(), selected, &records);
                })?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key) = event::read()? {
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }
                        match handle_home_key(key) {
                            HomeAction::StartRun => {
                                game = RunnerGame::new(selected);
                                result_recorded = false;
                                last_frame = Instant::now();
                                current_screen = Screen::Run;
                            }
                            HomeAction::PrevDifficulty => {
                                selected_index =
                                    (selected_index + Difficulty::ALL.len() - 1)
                                        % Difficulty::ALL.len();
                            }
                            HomeAction::NextDifficulty => {
                                selected_index = (selected_index + 1) % Difficulty::ALL.len();
                            }
                            HomeAction::SelectDifficulty(index) => {
                                selected_index = index.min(Difficulty::ALL.len() - 1);
                            }
                            HomeAction::Quit => break 'main,
                            HomeAction::None => {}
                        }
                    }
                }
            }
            Screen::Run => {
                terminal.draw(|f| {
                    ui::render_run_scene(f, f.size(), &game);
                })?;

                if event::poll(Duration::from_millis(FRAME_INTERVAL_MS))? {
                    if let Event::Key(key) = event::read()? {
                        if key.kind == KeyEventKind::Press {
                            match handle_run_key(key, game.outcome.is_some()) {
                                RunAction::Jump => {
                                    let at_ms = clock.elapsed().as_millis() as u64;
                                    process_input(&mut game, RunnerInput::Jump { at_ms });
                                }
                                RunAction::Restart => {
                                    game.reset();
                                    result_recorded = false;
                                    last_frame = Instant::now();
                                }
                                RunAction::QuitToHome | RunAction::Dismiss => {
                                    current_screen = Screen::Home;
                                }
                                RunAction::None => {
                                    process_input(&mut game, RunnerInput::Other);
                                }
                            }
                        }
                    }
                }

                let dt_ms = last_frame.elapsed().as_millis() as u64;
                last_frame = Instant::now();
                tick_run(&mut game, dt_ms, &mut rng);

                // Record each finished run exactly once
                if let Some(outcome) = game.outcome {
                    if !result_recorded {
                        records.record_run(
                            game.difficulty,
                            game.score,
                            outcome == RunOutcome::Won,
                        );
                        records.save()?;
                        result_recorded = true;
                    }
                }
            }
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    Ok(())
}
