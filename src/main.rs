//! Spline-Ribbon Kommandozeile.
//!
//! Lädt eine Spline-Szene aus TOML, generiert das Ribbon-Mesh und schreibt es als JSON.
//! Ohne `[options]` in der Szene gilt `spline_ribbon.toml` neben der Binary.
//!
//! Aufruf: `spline-ribbon <szene.toml> [ausgabe.json]`

use std::path::PathBuf;

use anyhow::Context;
use glam::Affine3A;
use serde::Serialize;
use spline_ribbon::{Aabb, RibbonMesh, RibbonOptions, RibbonScene, SplineRibbon};

/// JSON-Ausgabe: Mesh plus Welt-Bounds.
#[derive(Serialize)]
struct MeshExport<'a> {
    sample_count: usize,
    triangle_count: usize,
    bounds: Option<Aabb>,
    #[serde(flatten)]
    mesh: &'a RibbonMesh,
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Spline-Ribbon v{} startet...", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args_os().skip(1);
    let scene_path: PathBuf = args
        .next()
        .map(PathBuf::from)
        .context("Aufruf: spline-ribbon <szene.toml> [ausgabe.json]")?;
    let output_path: Option<PathBuf> = args.next().map(PathBuf::from);

    let scene = RibbonScene::load_from_file(&scene_path)?;
    let options =
        scene.options_or(|| RibbonOptions::load_from_file(&RibbonOptions::config_path()));
    let mut ribbon = SplineRibbon::new(scene.points, options);
    if let Some(kind) = scene.data_kind {
        ribbon = ribbon.with_data_kind(kind);
    }

    ribbon
        .update(&Affine3A::IDENTITY)
        .with_context(|| format!("Ribbon für {} nicht generierbar", scene_path.display()))?;

    let mesh = ribbon
        .mesh()
        .context("Ribbon-Mesh fehlt nach erfolgreicher Generierung")?;
    let export = MeshExport {
        sample_count: mesh.sample_count(),
        triangle_count: mesh.triangle_count(),
        bounds: ribbon.bounds(),
        mesh,
    };
    let json =
        serde_json::to_string_pretty(&export).context("JSON-Serialisierung fehlgeschlagen")?;

    match output_path {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Ausgabe nicht schreibbar: {}", path.display()))?;
            log::info!(
                "Mesh geschrieben nach {}: {} Samples, {} Dreiecke",
                path.display(),
                export.sample_count,
                export.triangle_count
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}
