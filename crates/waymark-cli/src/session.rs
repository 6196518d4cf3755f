//! Line-based driver for the map screen.
//!
//! Each stdin line is one gesture. The controller draws into a
//! [`TerminalMap`], so the marker commands it emits are printed as they
//! happen, followed by the notice for the gesture.

use std::{io::BufRead, sync::Arc, thread};

use anyhow::{bail, Context, Result};
use log::{debug, info};
use tokio::sync::mpsc;
use waymark_core::{
    FixedLocation, MapController, MarkerKey, Markers, OperationStatus, PlaceStore, PointType,
    ScreenCommand, ScreenConfig,
};

use crate::renderer::{TerminalMap, TerminalRenderer};

const HELP: &str = "\
Commands: tap <lat> <lon>, normal, alert, name <text>, cancel, dismiss,
marker <id>, zoom-in, zoom-out, zoom <z>, recenter, style, goto <id>,
delete <id>, state, help, quit
";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionInput {
    Screen(ScreenCommand),
    State,
    Help,
    Quit,
}

/// Parses one input line. Blank lines parse to `None`.
pub fn parse_line(line: &str) -> Result<Option<SessionInput>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb {
        "tap" => {
            let mut parts = rest.split_whitespace();
            let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
                bail!("usage: tap <lat> <lon>");
            };
            screen(ScreenCommand::TapMap {
                latitude: lat.parse().context("invalid latitude")?,
                longitude: lon.parse().context("invalid longitude")?,
            })
        }
        "normal" => screen(ScreenCommand::ChoosePointType(PointType::Normal)),
        "alert" => screen(ScreenCommand::ChoosePointType(PointType::Alert)),
        "name" => screen(ScreenCommand::ConfirmName(rest.to_string())),
        "cancel" => screen(ScreenCommand::CancelNaming),
        "dismiss" => screen(ScreenCommand::Dismiss),
        "marker" => screen(ScreenCommand::TapMarker(MarkerKey::Place(parse_id(rest)?))),
        "zoom-in" => screen(ScreenCommand::ZoomIn),
        "zoom-out" => screen(ScreenCommand::ZoomOut),
        "zoom" => screen(ScreenCommand::CameraChanged(
            rest.parse().context("usage: zoom <z>")?,
        )),
        "recenter" => screen(ScreenCommand::Recenter),
        "style" => screen(ScreenCommand::ToggleStyle),
        "goto" => screen(ScreenCommand::GoToPlace(parse_id(rest)?)),
        "delete" => screen(ScreenCommand::DeletePlace(parse_id(rest)?)),
        "state" => Ok(Some(SessionInput::State)),
        "help" => Ok(Some(SessionInput::Help)),
        "quit" | "exit" => Ok(Some(SessionInput::Quit)),
        other => bail!("unknown command '{other}', try 'help'"),
    }
}

fn screen(command: ScreenCommand) -> Result<Option<SessionInput>> {
    Ok(Some(SessionInput::Screen(command)))
}

fn parse_id(value: &str) -> Result<u64> {
    value
        .parse()
        .with_context(|| format!("expected a place ID, got '{value}'"))
}

/// Runs the map screen until `quit`, end of input or Ctrl-C.
pub async fn run_session(
    store: PlaceStore,
    renderer: TerminalRenderer,
    location: FixedLocation,
    config: ScreenConfig,
) -> Result<()> {
    let mut controller = MapController::new(
        Arc::new(store),
        TerminalMap::new(renderer),
        location,
        config,
    )?;
    controller.start();

    let mut lines = spawn_stdin_reader();

    loop {
        let line = tokio::select! {
            line = lines.recv() => line,
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, leaving session");
                None
            }
        };
        let Some(line) = line else {
            break;
        };

        let output = controller.renderer().output();
        let input = match parse_line(&line) {
            Ok(Some(input)) => input,
            Ok(None) => continue,
            Err(e) => {
                output.render(&OperationStatus::failure(format!("{e:#}")).to_string())?;
                continue;
            }
        };
        debug!("Session input: {input:?}");

        match input {
            SessionInput::Quit => break,
            SessionInput::Help => output.render(HELP)?,
            SessionInput::State => {
                let snapshot = controller.snapshot();
                output.render(&format!(
                    "# Screen\n\n- Dialog: {}\n- Camera: {}\n- Places: {}\n\n{}",
                    snapshot.interaction,
                    snapshot.camera,
                    snapshot.places.len(),
                    Markers(snapshot.markers)
                ))?;
            }
            SessionInput::Screen(command) => match controller.dispatch(command).await {
                Ok(notice) => controller
                    .renderer()
                    .output()
                    .render(&format!("{notice}\n"))?,
                Err(e) => controller
                    .renderer()
                    .output()
                    .render(&OperationStatus::failure(e.to_string()).to_string())?,
            },
        }
    }

    info!("Session ended with {} markers drawn", controller.renderer().drawn());
    Ok(())
}

// A plain thread rather than spawn_blocking: a blocked stdin read must not
// hold up runtime shutdown.
fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (sender, receiver) = mpsc::channel(16);
    thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if sender.blocking_send(line).is_err() {
                break;
            }
        }
    });
    receiver
}
