use std::path::PathBuf;

use clap::Parser;

/// braillevec — Braille-art to SVG converter.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
pub struct Cli {
    /// Fichier texte source contenant l'art Braille.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Fichier SVG de sortie. Défaut : le chemin source avec l'extension .svg.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Charger un preset nommé (ignore --config).
    #[arg(long)]
    pub preset: Option<String>,

    /// Mode de pitch : uniform, asymmetric.
    #[arg(long)]
    pub pitch: Option<String>,

    /// Mode de trim : none, edge, bbox.
    #[arg(long)]
    pub trim: Option<String>,

    /// Largeur de cellule en unités abstraites.
    #[arg(long)]
    pub step_x: Option<f64>,

    /// Hauteur de cellule relative à step_x (1.0 = pitch carré).
    #[arg(long)]
    pub y_ratio: Option<f64>,

    /// Pixels par unité abstraite.
    #[arg(long)]
    pub scale: Option<f64>,

    /// Marge horizontale du pitch asymétrique, dans (0, 0.5).
    #[arg(long)]
    pub margin_x: Option<f64>,

    /// Marge verticale du pitch asymétrique, dans (0, 0.5).
    #[arg(long)]
    pub margin_y: Option<f64>,

    /// Diamètre de point en fraction du plus petit écart, dans (0, 1).
    #[arg(long)]
    pub dot_ratio: Option<f64>,

    /// Couleur de remplissage SVG (ex : "currentColor", "#222").
    #[arg(long)]
    pub fill: Option<String>,

    /// Attribut width du document (ex : "460" ou "100%").
    #[arg(long)]
    pub width_attr: Option<String>,

    /// Dossier à convertir par lots (tous les *.txt qu'il contient).
    #[arg(long)]
    pub batch_folder: Option<PathBuf>,

    /// Dossier de sortie pour le lot. Défaut : à côté des sources.
    #[arg(long)]
    pub batch_out: Option<PathBuf>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Validate that exactly one source is provided.
    ///
    /// # Errors
    /// Returns an error if zero or both sources are specified.
    pub fn validate_source(&self) -> anyhow::Result<()> {
        let count = usize::from(self.input.is_some()) + usize::from(self.batch_folder.is_some());

        if count == 0 {
            anyhow::bail!("Aucune source spécifiée. Utilisez --input ou --batch-folder.");
        }
        if count > 1 {
            anyhow::bail!("Une seule source à la fois. Spécifiez --input OU --batch-folder.");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Cli {
        Cli::parse_from(["braillevec", "--input", "art.txt"])
    }

    #[test]
    fn single_input_is_accepted() {
        assert!(base().validate_source().is_ok());
    }

    #[test]
    fn no_source_is_rejected() {
        let cli = Cli::parse_from(["braillevec"]);
        assert!(cli.validate_source().is_err());
    }

    #[test]
    fn both_sources_are_rejected() {
        let cli = Cli::parse_from(["braillevec", "--input", "a.txt", "--batch-folder", "d"]);
        assert!(cli.validate_source().is_err());
    }
}
