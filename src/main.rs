//! Narrative State demo driver
//!
//! Runs a session script against a fresh `GameState` and reports the result.
//! With no argument the built-in demo session is used.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use narrative_state::{GameState, Script, FINISHED_STATE, INITIAL_STATE, VERSION};

/// Demo session: three steps of progress, a net bias of +3, then finish.
const DEMO_SCRIPT: &str = "\
# demo session
progress
progress
progress
bias 5
bias -2
state finished
";

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Narrative State v{}", VERSION);
    info!("Initial stage: {:?}, terminal stage: {:?}", INITIAL_STATE, FINISHED_STATE);

    let (source, text) = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read script {}", path))?;
            (path, text)
        }
        None => ("<demo>".to_string(), DEMO_SCRIPT.to_string()),
    };

    let script = Script::parse(&text).with_context(|| format!("Failed to parse script {}", source))?;
    run_session(&source, &script);
    Ok(())
}

/// Play a script command by command, logging as it goes.
fn run_session(source: &str, script: &Script) {
    info!("=== Running {} ({} commands) ===", source, script.len());

    let mut state = GameState::new();
    for (step, command) in script.commands().iter().enumerate() {
        command.apply(&mut state);
        info!("#{}: {} -> stage {:?}, progress {}, bias {}",
              step + 1, command, state.current_state().as_str(),
              state.player_progress(), state.bias_level());
    }

    info!("=== Session Result ===");
    info!("Stage: {}", state.current_state());
    info!("Progress: {}", state.player_progress());
    info!("Bias: {}", state.bias_level());
    info!("Finished: {}", state.is_game_finished());

    info!("State Hash: {}", hex::encode(state.compute_hash()));
}
