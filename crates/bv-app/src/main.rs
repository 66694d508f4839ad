use std::path::PathBuf;

use anyhow::Result;
use bv_core::config::{ConvertConfig, PitchMode, TrimMode};
use clap::Parser;

pub mod batch;
pub mod cli;
pub mod convert;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Valider la source
    cli.validate_source()?;

    // 4. Charger la config
    let mut config = resolve_config(&cli)?;

    // 4b. Appliquer les overrides CLI, puis re-valider : les overrides
    // passent par les mêmes règles que le fichier.
    apply_overrides(&cli, &mut config);
    config.validate()?;

    // 5. Lot ou fichier unique
    if let Some(folder) = cli.batch_folder.as_deref() {
        log::info!("Lancement de la conversion par lots...");
        return batch::run_batch(folder, cli.batch_out.as_deref(), &config);
    }

    let Some(input) = cli.input.as_deref() else {
        anyhow::bail!("Aucune source spécifiée. Utilisez --input ou --batch-folder.");
    };
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| input.with_extension("svg"));
    convert::convert_file(input, &output, &config)
}

/// Resolve config: preset takes priority over --config.
fn resolve_config(cli: &cli::Cli) -> Result<ConvertConfig> {
    if let Some(ref name) = cli.preset {
        let path = PathBuf::from(format!("config/presets/{name}.toml"));
        if path.exists() {
            bv_core::config::load_config(&path)
        } else {
            anyhow::bail!(
                "Preset inconnu : {name}. Voir config/presets/ (ex: 01_inline_badge, 02_asym_tight)"
            );
        }
    } else if cli.config.exists() {
        bv_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(ConvertConfig::default())
    }
}

/// Apply CLI overrides onto the loaded config.
fn apply_overrides(cli: &cli::Cli, config: &mut ConvertConfig) {
    if let Some(ref mode) = cli.pitch {
        config.pitch_mode = match mode.as_str() {
            "uniform" => PitchMode::Uniform,
            "asymmetric" | "asym" => PitchMode::Asymmetric,
            _ => {
                log::warn!("Pitch inconnu '{mode}', utilisation du défaut.");
                config.pitch_mode
            }
        };
    }
    if let Some(ref mode) = cli.trim {
        config.trim_mode = match mode.as_str() {
            "none" => TrimMode::None,
            "edge" | "edge-blank" => TrimMode::EdgeBlank,
            "bbox" | "bounding-box" => TrimMode::BoundingBox,
            _ => {
                log::warn!("Trim inconnu '{mode}', utilisation du défaut.");
                config.trim_mode
            }
        };
    }
    if let Some(v) = cli.step_x {
        config.step_x = v;
    }
    if let Some(v) = cli.y_ratio {
        config.y_ratio = v;
    }
    if let Some(v) = cli.scale {
        config.scale = v;
    }
    if let Some(v) = cli.margin_x {
        config.margin_x_ratio = v;
    }
    if let Some(v) = cli.margin_y {
        config.margin_y_ratio = v;
    }
    if let Some(v) = cli.dot_ratio {
        config.dot_diameter_ratio = v;
    }
    if let Some(ref v) = cli.fill {
        config.fill.clone_from(v);
    }
    if let Some(ref v) = cli.width_attr {
        config.width_attr.clone_from(v);
    }
}
