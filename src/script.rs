//! Zeilenbasiertes Eingabe-Skript für den Headless-Betrieb.
//!
//! Jede Zeile ist ein Befehl, optional mit Ebenen-Koordinaten:
//!
//! ```text
//! # Dreieck zeichnen
//! new
//! release 0 0
//! release 100 0
//! release 0 100
//! close
//! ```
//!
//! Leerzeilen und Zeilen ab `#` werden übersprungen.

use crate::app::AppIntent;
use anyhow::{anyhow, bail, Context};
use glam::Vec2;

/// Parst eine Skriptzeile in einen `AppIntent`.
///
/// Gibt `Ok(None)` für Leer- und Kommentarzeilen zurück.
pub fn parse_line(line: &str) -> anyhow::Result<Option<AppIntent>> {
    let content = line.split('#').next().unwrap_or_default().trim();
    if content.is_empty() {
        return Ok(None);
    }

    let mut tokens = content.split_whitespace();
    let keyword = tokens.next().unwrap_or_default().to_ascii_lowercase();
    let args: Vec<&str> = tokens.collect();

    let intent = match keyword.as_str() {
        "move" => AppIntent::PointerMoved {
            plane_pos: parse_pos(&keyword, &args)?,
        },
        "press" => AppIntent::PointerPressed {
            plane_pos: parse_pos(&keyword, &args)?,
        },
        "drag" => AppIntent::PointerDragged {
            plane_pos: parse_pos(&keyword, &args)?,
        },
        "release" => AppIntent::PointerReleased {
            plane_pos: parse_pos(&keyword, &args)?,
        },
        other => {
            if !args.is_empty() {
                bail!("'{}' erwartet keine Argumente", other);
            }
            match other {
                "close" => AppIntent::CloseShapeRequested,
                "new" => AppIntent::NewShapeRequested,
                "delete" => AppIntent::DeleteRequested,
                "cycle" => AppIntent::CycleSelectionRequested,
                "snap" => AppIntent::ToggleGridSnapRequested,
                "reset" => AppIntent::ResetRequested,
                "clear" => AppIntent::ClearSelectionRequested,
                _ => bail!("Unbekannter Befehl: '{}'", other),
            }
        }
    };

    Ok(Some(intent))
}

fn parse_pos(keyword: &str, args: &[&str]) -> anyhow::Result<Vec2> {
    let [x, y] = args else {
        return Err(anyhow!(
            "'{}' erwartet zwei Koordinaten, erhalten: {}",
            keyword,
            args.len()
        ));
    };

    let x: f32 = x
        .parse()
        .with_context(|| format!("Ungültige x-Koordinate: '{}'", x))?;
    let y: f32 = y
        .parse()
        .with_context(|| format!("Ungültige y-Koordinate: '{}'", y))?;

    if !x.is_finite() || !y.is_finite() {
        bail!("Koordinaten müssen endlich sein: ({}, {})", x, y);
    }
    Ok(Vec2::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pointer_commands_with_coordinates() {
        assert_eq!(
            parse_line("press 12.5 -3").expect("Zeile sollte parsen"),
            Some(AppIntent::PointerPressed {
                plane_pos: Vec2::new(12.5, -3.0)
            })
        );
        assert_eq!(
            parse_line("  DRAG 1 2  # ziehen").expect("Zeile sollte parsen"),
            Some(AppIntent::PointerDragged {
                plane_pos: Vec2::new(1.0, 2.0)
            })
        );
    }

    #[test]
    fn parses_keyword_commands() {
        assert_eq!(
            parse_line("close").expect("Zeile sollte parsen"),
            Some(AppIntent::CloseShapeRequested)
        );
        assert_eq!(
            parse_line("snap").expect("Zeile sollte parsen"),
            Some(AppIntent::ToggleGridSnapRequested)
        );
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert_eq!(parse_line("").expect("Leerzeile"), None);
        assert_eq!(parse_line("   # nur Kommentar").expect("Kommentar"), None);
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(parse_line("jump 1 2").is_err());
        assert!(parse_line("move 1").is_err());
        assert!(parse_line("move a b").is_err());
        assert!(parse_line("move NaN 0").is_err());
        assert!(parse_line("close now").is_err());
    }
}
