use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bv_core::config::ConvertConfig;
use rayon::prelude::*;

use crate::convert;

/// Point d'entrée pour la conversion par lots.
///
/// Convertit tous les `*.txt` du dossier, en parallèle — chaque fichier
/// est une conversion indépendante, aucune coordination nécessaire. Un
/// échec individuel est loggé sans abandonner le lot.
///
/// # Errors
/// Retourne une erreur si le dossier est illisible, ne contient aucun
/// `.txt`, ou si au moins une conversion a échoué.
pub fn run_batch(folder: &Path, out_dir: Option<&Path>, config: &ConvertConfig) -> Result<()> {
    let mut sources: Vec<PathBuf> = std::fs::read_dir(folder)
        .with_context(|| format!("Impossible de lister {}", folder.display()))?
        .filter_map(std::result::Result::ok)
        .map(|e| e.path())
        .filter(|p| {
            p.extension()
                .and_then(|s| s.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("txt"))
        })
        .collect();
    sources.sort();

    if sources.is_empty() {
        anyhow::bail!("Aucun fichier .txt trouvé dans {}", folder.display());
    }
    if let Some(dir) = out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Impossible de créer {}", dir.display()))?;
    }
    log::info!("{} fichier(s) à convertir", sources.len());

    let failures: usize = sources
        .par_iter()
        .map(|src| {
            let out = output_path(src, out_dir);
            match convert::convert_file(src, &out, config) {
                Ok(()) => 0,
                Err(e) => {
                    log::error!("Échec sur {} : {e:#}", src.display());
                    1
                }
            }
        })
        .sum();

    if failures > 0 {
        anyhow::bail!("{failures} conversion(s) en échec sur {}", sources.len());
    }
    Ok(())
}

/// Auto-naming : même nom de fichier, extension .svg, dans `out_dir`
/// s'il est fourni, sinon à côté de la source.
fn output_path(src: &Path, out_dir: Option<&Path>) -> PathBuf {
    let renamed = src.with_extension("svg");
    if let (Some(dir), Some(name)) = (out_dir, renamed.file_name()) {
        dir.join(name)
    } else {
        renamed
    }
}
