use super::slate::SnapshotFormat;
use crate::config::Config;
use colored::Colorize;
use eyre::{Context as _, Result};
use log::debug;
use slate_core::{Effect, InputDispatcher, Session};

pub fn run(config: &Config, keys: &str, format: SnapshotFormat) -> Result<()> {
    let mut session = Session::new(config.overflow());
    let mut dispatcher = InputDispatcher::new(config.keymap());

    for key in keys.chars() {
        let effects = dispatcher.feed(key, &mut session);
        if effects.is_empty() {
            println!("{}  {}", key_label(key), "-".dimmed());
            continue;
        }
        for effect in &effects {
            println!("{}  {}", key_label(key), colorize(effect));
        }
    }

    if !dispatcher.buffered().is_empty() {
        debug!("unresolved input left in buffer: {:?}", dispatcher.buffered());
    }

    println!();
    println!("{}", snapshot(&session, format)?);
    Ok(())
}

fn key_label(key: char) -> String {
    format!("{key:?}").cyan().bold().to_string()
}

fn colorize(effect: &Effect) -> String {
    let text = effect.to_string();
    match effect {
        Effect::EntryRejected { .. } => text.red().to_string(),
        Effect::QrOverlay { .. }
        | Effect::DualModeChanged { .. }
        | Effect::TakeModeChanged { .. } => text.yellow().to_string(),
        Effect::CameraSelected { .. }
        | Effect::NumCamsChanged { .. }
        | Effect::EditTargetChanged { .. } => text.purple().to_string(),
        _ => text.green().to_string(),
    }
}

fn snapshot(session: &Session, format: SnapshotFormat) -> Result<String> {
    match format {
        SnapshotFormat::Text => Ok(session.summary()),
        SnapshotFormat::Toml => {
            toml::to_string_pretty(session).wrap_err("failed to serialize session")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(keys: &str) -> Session {
        let config = Config::default();
        let mut session = Session::new(config.overflow());
        InputDispatcher::new(config.keymap()).feed_str(keys, &mut session);
        session
    }

    #[test]
    fn test_text_snapshot() {
        let session = replay("tttrSdsdllk");
        assert_eq!(
            snapshot(&session, SnapshotFormat::Text).unwrap(),
            "ROLL A101 (01 cam) | SCENE 02.002 | TAKE 03 SERIES"
        );
    }

    #[test]
    fn test_toml_snapshot() {
        let session = replay("Rrtcc");
        let text = snapshot(&session, SnapshotFormat::Toml).unwrap();
        assert!(text.contains("current_cam = 1"));
        assert!(text.contains("letter = \"B\""));
        assert!(text.contains("mode = \"normal\""));
    }
}
