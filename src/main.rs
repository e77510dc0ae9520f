//! Polyline Editor (Headless-Treiber).
//!
//! Liest ein Eingabe-Skript (Datei-Argument oder stdin), spielt es gegen die
//! Edit-Engine ab und protokolliert das Ergebnis.

use anyhow::Context;
use polyline_editor::{script, AppController, AppState, EditorOptions};
use std::io::Read;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Polyline Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = EditorOptions::config_path();
    let options = EditorOptions::load_from_file(&config_path);

    let mut state = AppState::with_options(options);
    let mut controller = AppController::with_config_path(config_path);

    let source = read_script()?;
    let mut executed = 0usize;
    let mut skipped = 0usize;

    for (index, line) in source.lines().enumerate() {
        let line_no = index + 1;
        let intent = match script::parse_line(line) {
            Ok(Some(intent)) => intent,
            Ok(None) => continue,
            Err(e) => {
                log::warn!("Zeile {} übersprungen: {:#}", line_no, e);
                skipped += 1;
                continue;
            }
        };

        if let Err(e) = controller.handle_intent(&mut state, intent) {
            log::error!("Zeile {}: Event handling failed: {:#}", line_no, e);
        }
        executed += 1;
    }

    let scene = controller.build_render_scene(&state);
    log::info!(
        "{} Befehle ausgeführt, {} übersprungen, {} Commands geloggt",
        executed,
        skipped,
        state.command_log.len()
    );
    log::info!(
        "{} Faces mit {} Punkten (offen: {}, Snap: {})",
        scene.shapes.len(),
        scene.shapes.point_count(),
        scene.appending,
        scene.snap_to_grid
    );
    for (index, face) in scene.shapes.faces().iter().enumerate() {
        log::info!(
            "Face {} ({}): {:?}",
            index,
            if face.closed { "geschlossen" } else { "offen" },
            face.points
        );
    }
    log::info!("Aktiv: {:?} / Hover: {:?}", scene.active, scene.hover);

    Ok(())
}

/// Liest das Skript aus der Datei im ersten Argument oder von stdin.
fn read_script() -> anyhow::Result<String> {
    match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Skript '{}' konnte nicht gelesen werden", path)),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Skript konnte nicht von stdin gelesen werden")?;
            Ok(buffer)
        }
    }
}
