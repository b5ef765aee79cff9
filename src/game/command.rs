//! Session Commands
//!
//! Named mutations of a [`GameState`], their one-line text form, and
//! replay of a command sequence onto a state.
//!
//! ```text
//! # comment
//! state Cellar
//! progress
//! bias -2
//! ```

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use tracing::trace;

use crate::game::label::StageLabel;
use crate::game::state::GameState;

/// A single named mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Replace the current stage label
    UpdateState(StageLabel),
    /// Advance progress by one
    IncreaseProgress,
    /// Add a signed amount to the bias level
    AdjustBias(i64),
}

impl Command {
    /// Apply this command to a state.
    pub fn apply(&self, state: &mut GameState) {
        match self {
            Command::UpdateState(label) => state.update_state(label.clone()),
            Command::IncreaseProgress => state.increase_progress(),
            Command::AdjustBias(amount) => state.adjust_bias(*amount),
        }
    }
}

/// Errors from parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Nothing but whitespace
    #[error("empty command")]
    Empty,

    /// First word is not a known command
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Command needs an argument that was not given
    #[error("missing {0}")]
    MissingArgument(&'static str),

    /// Command takes no argument but one was given
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),

    /// Bias amount is not a signed integer
    #[error("invalid bias amount {value:?}: {source}")]
    InvalidAmount {
        /// The text that failed to parse
        value: String,
        /// Underlying integer parse error
        source: ParseIntError,
    },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (keyword, argument) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, Some(rest)),
            None => (line, None),
        };

        match keyword {
            "" => Err(CommandError::Empty),
            // Label is taken verbatim, so it may contain spaces or be empty
            "state" => argument
                .map(|label| Command::UpdateState(StageLabel::from(label)))
                .ok_or(CommandError::MissingArgument("label")),
            "progress" => match argument.map(str::trim) {
                None | Some("") => Ok(Command::IncreaseProgress),
                Some(extra) => Err(CommandError::UnexpectedArgument(extra.to_string())),
            },
            "bias" => {
                let value = argument
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .ok_or(CommandError::MissingArgument("amount"))?;
                value
                    .parse::<i64>()
                    .map(Command::AdjustBias)
                    .map_err(|source| CommandError::InvalidAmount {
                        value: value.to_string(),
                        source,
                    })
            }
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::UpdateState(label) => write!(f, "state {}", label),
            Command::IncreaseProgress => f.write_str("progress"),
            Command::AdjustBias(amount) => write!(f, "bias {}", amount),
        }
    }
}

// =============================================================================
// SCRIPT
// =============================================================================

/// Errors from parsing a multi-line script.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    /// A line failed to parse
    #[error("line {line}: {source}")]
    Line {
        /// 1-based line number
        line: usize,
        /// What went wrong on that line
        source: CommandError,
    },
}

/// An ordered list of commands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Script {
    commands: Vec<Command>,
}

impl Script {
    /// Create a script from commands.
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    /// Parse one command per line. Blank lines and `#` comments are skipped.
    ///
    /// Trailing whitespace on a line is dropped, so `state finished ` in a
    /// script file sets the `finished` label.
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let mut commands = Vec::new();
        for (index, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let command = line
                .trim_end()
                .parse::<Command>()
                .map_err(|source| ScriptError::Line { line: index + 1, source })?;
            commands.push(command);
        }
        Ok(Self { commands })
    }

    /// Commands in order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the script has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replay onto a fresh state.
    pub fn run(&self) -> GameState {
        replay(GameState::new(), &self.commands)
    }
}

impl FromIterator<Command> for Script {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Apply commands in order and return the final state.
pub fn replay(mut state: GameState, commands: &[Command]) -> GameState {
    for command in commands {
        trace!(%command, "replaying");
        command.apply(&mut state);
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("progress".parse::<Command>(), Ok(Command::IncreaseProgress));
        assert_eq!("  progress  ".parse::<Command>(), Ok(Command::IncreaseProgress));
        assert_eq!("bias 5".parse::<Command>(), Ok(Command::AdjustBias(5)));
        assert_eq!("bias -2".parse::<Command>(), Ok(Command::AdjustBias(-2)));
        assert_eq!("bias +7".parse::<Command>(), Ok(Command::AdjustBias(7)));
        assert_eq!(
            "state finished".parse::<Command>(),
            Ok(Command::UpdateState(StageLabel::finished()))
        );
    }

    #[test]
    fn test_state_label_is_verbatim() {
        assert_eq!(
            "state The Old Lighthouse".parse::<Command>(),
            Ok(Command::UpdateState(StageLabel::from("The Old Lighthouse")))
        );
        assert_eq!(
            "state Finished".parse::<Command>(),
            Ok(Command::UpdateState(StageLabel::from("Finished")))
        );
        assert_eq!("state ".parse::<Command>(), Ok(Command::UpdateState(StageLabel::from(""))));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "jump".parse::<Command>(),
            Err(CommandError::UnknownCommand("jump".to_string()))
        );
        assert_eq!(
            "Progress".parse::<Command>(),
            Err(CommandError::UnknownCommand("Progress".to_string()))
        );
        assert_eq!("state".parse::<Command>(), Err(CommandError::MissingArgument("label")));
        assert_eq!("bias".parse::<Command>(), Err(CommandError::MissingArgument("amount")));
        assert_eq!("bias   ".parse::<Command>(), Err(CommandError::MissingArgument("amount")));
        assert_eq!(
            "progress 2".parse::<Command>(),
            Err(CommandError::UnexpectedArgument("2".to_string()))
        );

        match "bias lots".parse::<Command>() {
            Err(CommandError::InvalidAmount { value, .. }) => assert_eq!(value, "lots"),
            other => panic!("expected InvalidAmount, got {:?}", other),
        }
    }

    #[test]
    fn test_display_parses_back() {
        let commands = [
            Command::UpdateState(StageLabel::from("Chapter 2")),
            Command::IncreaseProgress,
            Command::AdjustBias(-40),
        ];
        for command in commands {
            assert_eq!(command.to_string().parse::<Command>(), Ok(command));
        }
    }

    #[test]
    fn test_apply() {
        let mut state = GameState::new();
        Command::IncreaseProgress.apply(&mut state);
        Command::AdjustBias(-3).apply(&mut state);
        Command::UpdateState(StageLabel::from("Cellar")).apply(&mut state);

        assert_eq!(state.player_progress(), 1);
        assert_eq!(state.bias_level(), -3);
        assert_eq!(*state.current_state(), "Cellar");
    }

    #[test]
    fn test_script_parse_and_run() {
        let script = Script::parse(
            "# warm-up\n\
             progress\n\
             progress\n\
             \n\
             progress\n\
             bias 5\n\
             bias -2\n\
             state finished\n",
        )
        .unwrap();

        assert_eq!(script.len(), 6);

        let state = script.run();
        assert_eq!(state.player_progress(), 3);
        assert_eq!(state.bias_level(), 3);
        assert!(state.is_game_finished());
    }

    #[test]
    fn test_script_reports_line() {
        let err = Script::parse("progress\n# ok\nbias x\n").unwrap_err();
        match err {
            ScriptError::Line { line, source } => {
                assert_eq!(line, 3);
                assert!(matches!(source, CommandError::InvalidAmount { .. }));
            }
        }
    }

    #[test]
    fn test_script_ignores_trailing_whitespace() {
        let script = Script::parse("progress \t\nbias 4  \nstate finished \r\n").unwrap();
        assert_eq!(
            script.commands(),
            &[
                Command::IncreaseProgress,
                Command::AdjustBias(4),
                Command::UpdateState(StageLabel::finished()),
            ]
        );
        assert!(script.run().is_game_finished());

        // Inner spaces of a label are kept
        let script = Script::parse("state The Old Lighthouse  \n").unwrap();
        assert_eq!(
            script.commands(),
            &[Command::UpdateState(StageLabel::from("The Old Lighthouse"))]
        );
    }

    #[test]
    fn test_empty_script() {
        let script = Script::parse("\n# nothing here\n").unwrap();
        assert!(script.is_empty());
        assert_eq!(script.run(), GameState::new());
    }

    #[test]
    fn test_replay_continues_from_state() {
        let mut start = GameState::new();
        start.adjust_bias(10);

        let commands: Script = vec![Command::AdjustBias(-4), Command::IncreaseProgress]
            .into_iter()
            .collect();
        let state = replay(start, commands.commands());

        assert_eq!(state.bias_level(), 6);
        assert_eq!(state.player_progress(), 1);
    }

    #[test]
    fn test_replay_is_deterministic() {
        let script = Script::parse("state Cellar\nprogress\nbias 9\n").unwrap();
        assert_eq!(script.run().compute_hash(), script.run().compute_hash());
    }
}
