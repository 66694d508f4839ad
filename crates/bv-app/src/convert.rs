use std::path::Path;

use anyhow::{Context, Result};
use bv_core::config::ConvertConfig;
use bv_core::error::CoreError;
use bv_geom::pipeline::convert_text;
use bv_svg::document::svg_document;

/// Convertit un texte Braille en document SVG.
///
/// # Errors
/// Retourne une erreur si la configuration est invalide.
pub fn convert_string(text: &str, config: &ConvertConfig) -> Result<String> {
    let geometry = convert_text(text, config)?;
    Ok(svg_document(&geometry, &config.fill, &config.width_attr))
}

/// Convertit un fichier texte Braille en fichier SVG.
///
/// # Errors
/// Retourne une erreur si la lecture, la conversion ou l'écriture échoue.
pub fn convert_file(input: &Path, output: &Path, config: &ConvertConfig) -> Result<()> {
    if !input.exists() {
        return Err(CoreError::FileNotFound {
            path: input.display().to_string(),
        }
        .into());
    }
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("Impossible de lire {}", input.display()))?;

    let svg = convert_string(&text, config)?;

    std::fs::write(output, &svg)
        .with_context(|| format!("Impossible d'écrire {}", output.display()))?;
    log::info!("WROTE {} ({} octets)", output.display(), svg.len());
    Ok(())
}
