//! Game runner hand-off
//!
//! Passes a finalized selection to whatever plays the game: plain lines on
//! stdout for a wrapper script, a JSON object, or the master program itself
//! spawned with the lines written to its stdin.

use crate::config::MenuConfig;
use crate::menu::GameSelection;
use crate::{MenuError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{error, info};

/// Where the selection goes once the game begins
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handoff {
    /// Five lines on stdout: mode, engine, side, opponent, token
    Stdout,
    /// One JSON object on stdout
    Json,
    /// Spawn the master program and feed it the five lines
    Command { program: PathBuf, args: Vec<String> },
}

impl Handoff {
    /// Pick the hand-off the configuration asks for
    pub fn from_config(config: &MenuConfig, json: bool) -> Self {
        match (&config.master_program, json) {
            (_, true) => Self::Json,
            (Some(program), false) => Self::Command {
                program: program.clone(),
                args: config.master_program_args.clone(),
            },
            (None, false) => Self::Stdout,
        }
    }

    /// Deliver the selection, waiting for the master program if one is spawned
    pub async fn deliver(&self, selection: &GameSelection) -> Result<()> {
        match self {
            Self::Stdout => {
                let stdout = std::io::stdout();
                write_lines(&mut stdout.lock(), selection)
            }
            Self::Json => {
                let stdout = std::io::stdout();
                write_json(&mut stdout.lock(), selection)
            }
            Self::Command { program, args } => run_master_program(program, args, selection).await,
        }
    }
}

/// Write the five hand-off lines
pub fn write_lines<W: Write>(out: &mut W, selection: &GameSelection) -> Result<()> {
    for line in selection.wire_lines() {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}

/// Write the selection as one JSON object
pub fn write_json<W: Write>(out: &mut W, selection: &GameSelection) -> Result<()> {
    serde_json::to_writer(&mut *out, &selection.flat())?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// One-line notice shown once the menu has left the screen
pub fn write_summary<W: Write>(out: &mut W, selection: &GameSelection) -> Result<()> {
    writeln!(out, "Game in progress: {}", selection)?;
    out.flush()?;
    Ok(())
}

async fn run_master_program(
    program: &Path,
    args: &[String],
    selection: &GameSelection,
) -> Result<()> {
    info!(program = %program.display(), "starting master program");

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| {
            MenuError::Handoff(format!("Failed to start {}: {}", program.display(), e))
        })?;

    let mut stdin = child.stdin.take().ok_or_else(|| {
        MenuError::Handoff("Failed to get stdin from master program".to_string())
    })?;

    let mut payload = Vec::new();
    write_lines(&mut payload, selection)?;
    stdin.write_all(&payload).await?;
    stdin.shutdown().await?;
    drop(stdin);

    let status = child.wait().await?;
    if !status.success() {
        error!(%status, "master program failed");
        return Err(MenuError::Handoff(format!(
            "{} exited with {}",
            program.display(),
            status
        )));
    }

    info!("master program finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{EngineChoice, GameMode, SelectionDraft, Side};

    fn online_selection() -> GameSelection {
        let mut draft = SelectionDraft::with_token("TOKEN42");
        draft.game_mode = Some(GameMode::Online);
        draft.opponent_id = "abc123".into();
        draft.side = Some(Side::Black);
        draft.commit().unwrap()
    }

    #[test]
    fn test_summary_names_the_game() {
        let mut out = Vec::new();
        write_summary(&mut out, &online_selection()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Game in progress: online vs abc123 as black\n"
        );
    }

    #[test]
    fn test_write_lines_order() {
        let mut out = Vec::new();
        write_lines(&mut out, &online_selection()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "lichess\n\nblack\nabc123\nTOKEN42\n"
        );
    }

    #[test]
    fn test_write_json() {
        let mut draft = SelectionDraft::default();
        draft.game_mode = Some(GameMode::VsEngine);
        draft.engine = Some(EngineChoice::Viridithas);
        draft.side = Some(Side::White);

        let mut out = Vec::new();
        write_json(&mut out, &draft.commit().unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["game_mode"], "vs_engine");
        assert_eq!(value["engine_choice"], "viridithas");
        assert_eq!(value["opponent_id"], "");
    }

    #[test]
    fn test_from_config() {
        let config = MenuConfig::default();
        assert_eq!(Handoff::from_config(&config, false), Handoff::Stdout);
        assert_eq!(Handoff::from_config(&config, true), Handoff::Json);

        let config = config.with_master_program(PathBuf::from("./master-program"));
        assert!(matches!(
            Handoff::from_config(&config, false),
            Handoff::Command { .. }
        ));
    }

    #[tokio::test]
    async fn test_missing_program_is_handoff_error() {
        let handoff = Handoff::Command {
            program: PathBuf::from("/nonexistent/master-program"),
            args: Vec::new(),
        };
        assert!(matches!(
            handoff.deliver(&online_selection()).await,
            Err(MenuError::Handoff(_))
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_receives_lines() {
        let dir = tempfile::TempDir::new().unwrap();
        let out_path = dir.path().join("received.txt");
        let handoff = Handoff::Command {
            program: PathBuf::from("sh"),
            args: vec![
                "-c".to_string(),
                format!("cat > '{}'", out_path.display()),
            ],
        };

        handoff.deliver(&online_selection()).await.unwrap();
        let received = std::fs::read_to_string(&out_path).unwrap();
        assert_eq!(received, "lichess\n\nblack\nabc123\nTOKEN42\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_nonzero_exit_is_error() {
        let handoff = Handoff::Command {
            program: PathBuf::from("sh"),
            args: vec!["-c".to_string(), "cat > /dev/null; exit 3".to_string()],
        };
        assert!(handoff.deliver(&online_selection()).await.is_err());
    }
}
