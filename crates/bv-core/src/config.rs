use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Marges intra-cellule du pitch uniforme : colonnes à 25 %/75 % de la
/// largeur, rangées à 1/8, 3/8, 5/8, 7/8 de la hauteur. Avec ces valeurs
/// l'écart intra-cellule égale l'écart inter-cellules sur chaque axe.
pub const UNIFORM_MARGIN_X: f64 = 0.25;
/// Voir [`UNIFORM_MARGIN_X`].
pub const UNIFORM_MARGIN_Y: f64 = 0.125;

/// Configuration complète de la conversion.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
/// Contrairement aux configs clampées, toute valeur hors plage est
/// rejetée par [`ConvertConfig::validate`] avant tout calcul de
/// géométrie.
///
/// # Example
/// ```
/// use bv_core::config::ConvertConfig;
/// let config = ConvertConfig::default();
/// assert_eq!(config.step_x, 2.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ConvertConfig {
    // === Pitch ===
    /// "Uniform" | "Asymmetric"
    pub pitch_mode: PitchMode,
    /// Largeur de cellule en unités abstraites (contrôle la largeur totale).
    pub step_x: f64,
    /// Hauteur de cellule = `step_x * y_ratio` (1.0 = pitch carré).
    pub y_ratio: f64,
    /// Pixels par unité abstraite (taille de sortie uniquement).
    pub scale: f64,
    /// Marge du bord de cellule au premier/dernier centre de colonne,
    /// fraction de `step_x`. Pitch asymétrique uniquement ; (0, 0.5).
    pub margin_x_ratio: f64,
    /// Marge verticale équivalente, fraction de la hauteur de cellule ; (0, 0.5).
    pub margin_y_ratio: f64,
    /// Diamètre de point en fraction du plus petit écart dérivé ; (0, 1).
    pub dot_diameter_ratio: f64,

    // === Trim ===
    /// "None" | "EdgeBlank" | "BoundingBox"
    pub trim_mode: TrimMode,

    // === Document SVG ===
    /// Couleur de remplissage des cercles.
    pub fill: String,
    /// Attribut `width` du document (ex : "460" ou "100%").
    pub width_attr: String,
}

/// Pitch mode enumeration.
///
/// # Example
/// ```
/// use bv_core::config::PitchMode;
/// let mode = PitchMode::default();
/// assert!(matches!(mode, PitchMode::Uniform));
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum PitchMode {
    /// Colonnes à 25 %/75 %, rangées à (2i+1)/8 — écarts intra == inter.
    #[default]
    Uniform,
    /// Marges explicites par axe — écarts intra et inter indépendants.
    Asymmetric,
}

/// Trim mode enumeration.
///
/// # Example
/// ```
/// use bv_core::config::TrimMode;
/// let mode = TrimMode::default();
/// assert!(matches!(mode, TrimMode::BoundingBox));
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum TrimMode {
    /// Aucun trim, la grille passe telle quelle.
    None,
    /// Retire les lignes/colonnes entièrement blanches, des quatre bords
    /// vers l'intérieur. Les blancs internes sont conservés.
    EdgeBlank,
    /// Rectangle minimal couvrant toutes les cellules occupées.
    #[default]
    BoundingBox,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            pitch_mode: PitchMode::Uniform,
            step_x: 2.0,
            y_ratio: 1.0,
            scale: 12.0,
            margin_x_ratio: 0.28,
            margin_y_ratio: 0.150,
            dot_diameter_ratio: 0.48,
            trim_mode: TrimMode::BoundingBox,
            fill: "currentColor".to_string(),
            width_attr: "100%".to_string(),
        }
    }
}

impl ConvertConfig {
    /// Hauteur de cellule dérivée.
    #[must_use]
    pub fn step_y(&self) -> f64 {
        self.step_x * self.y_ratio
    }

    /// Ratios de marge effectifs selon le mode de pitch.
    ///
    /// Le pitch uniforme est le couple fixe (0.25, 0.125) ; l'asymétrique
    /// utilise les marges de la config.
    #[must_use]
    pub fn margin_ratios(&self) -> (f64, f64) {
        match self.pitch_mode {
            PitchMode::Uniform => (UNIFORM_MARGIN_X, UNIFORM_MARGIN_Y),
            PitchMode::Asymmetric => (self.margin_x_ratio, self.margin_y_ratio),
        }
    }

    /// Rejette toute valeur hors de sa plage, avant tout rendu.
    ///
    /// Les marges sont vérifiées même sous pitch uniforme : un preset
    /// mal saisi échoue immédiatement plutôt qu'au changement de mode.
    ///
    /// # Errors
    /// `CoreError::Config` nommant le paramètre fautif et la valeur reçue.
    pub fn validate(&self) -> std::result::Result<(), CoreError> {
        fn positive(name: &str, v: f64) -> std::result::Result<(), CoreError> {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(CoreError::Config(format!(
                    "{name} doit être un nombre fini strictement positif (reçu {v})"
                )))
            }
        }
        fn open_interval(
            name: &str,
            v: f64,
            hi: f64,
        ) -> std::result::Result<(), CoreError> {
            if v.is_finite() && v > 0.0 && v < hi {
                Ok(())
            } else {
                Err(CoreError::Config(format!(
                    "{name} doit être dans l'intervalle ouvert (0, {hi}) (reçu {v})"
                )))
            }
        }

        positive("step_x", self.step_x)?;
        positive("y_ratio", self.y_ratio)?;
        positive("scale", self.scale)?;
        open_interval("margin_x_ratio", self.margin_x_ratio, 0.5)?;
        open_interval("margin_y_ratio", self.margin_y_ratio, 0.5)?;
        open_interval("dot_diameter_ratio", self.dot_diameter_ratio, 1.0)?;

        // Les quatre écarts dérivés doivent rester positifs.
        let (mx, my) = self.margin_ratios();
        let step_y = self.step_y();
        let gaps = [
            ("intra_gap_x", self.step_x - 2.0 * mx * self.step_x),
            ("inter_gap_x", 2.0 * mx * self.step_x),
            ("intra_gap_y", (step_y - 2.0 * my * step_y) / 3.0),
            ("inter_gap_y", 2.0 * my * step_y),
        ];
        for (name, gap) in gaps {
            if !(gap.is_finite() && gap > 0.0) {
                return Err(CoreError::Config(format!(
                    "écart dérivé {name} non positif ({gap}) — vérifier step_x/y_ratio/marges"
                )));
            }
        }
        Ok(())
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    pitch: Option<PitchSection>,
    trim: Option<TrimSection>,
    svg: Option<SvgSection>,
}

/// Pitch section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct PitchSection {
    mode: Option<PitchMode>,
    step_x: Option<f64>,
    y_ratio: Option<f64>,
    scale: Option<f64>,
    margin_x_ratio: Option<f64>,
    margin_y_ratio: Option<f64>,
    dot_diameter_ratio: Option<f64>,
}

/// Trim section of the TOML config.
#[derive(Deserialize)]
struct TrimSection {
    mode: Option<TrimMode>,
}

/// SVG section of the TOML config.
#[derive(Deserialize)]
struct SvgSection {
    fill: Option<String>,
    width: Option<String>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// Valide la configuration fusionnée — une valeur hors plage est une
/// erreur, jamais clampée.
///
/// # Errors
/// Returns an error if the file cannot be read, parsed, or validated.
///
/// # Example
/// ```no_run
/// use bv_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<ConvertConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))?;

    let mut config = ConvertConfig::default();

    if let Some(p) = file.pitch {
        if let Some(v) = p.mode {
            config.pitch_mode = v;
        }
        if let Some(v) = p.step_x {
            config.step_x = v;
        }
        if let Some(v) = p.y_ratio {
            config.y_ratio = v;
        }
        if let Some(v) = p.scale {
            config.scale = v;
        }
        if let Some(v) = p.margin_x_ratio {
            config.margin_x_ratio = v;
        }
        if let Some(v) = p.margin_y_ratio {
            config.margin_y_ratio = v;
        }
        if let Some(v) = p.dot_diameter_ratio {
            config.dot_diameter_ratio = v;
        }
    }

    if let Some(t) = file.trim {
        if let Some(v) = t.mode {
            config.trim_mode = v;
        }
    }

    if let Some(s) = file.svg {
        if let Some(v) = s.fill {
            config.fill = v;
        }
        if let Some(v) = s.width {
            config.width_attr = v;
        }
    }

    config.validate()?;
    log::debug!("Config chargée depuis {}", path.display());
    Ok(config)
}
