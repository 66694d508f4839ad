use bv_core::config::ConvertConfig;
use bv_core::error::CoreError;
use bv_core::geometry::Geometry;
use bv_core::grid::Grid;

use crate::metrics::CellMetrics;
use crate::render::render;
use crate::trim::trim;

/// Conversion complète : texte Braille → géométrie.
///
/// Fonction pure et idempotente — deux appels sur le même texte et la
/// même config donnent une géométrie identique au bit près. La
/// validation de la config est le seul point d'échec ; tout le reste
/// (texte vide, caractères inconnus, lignes inégales) est un
/// comportement défini.
///
/// # Errors
/// `CoreError::Config` si un paramètre est hors plage.
///
/// # Example
/// ```
/// use bv_core::config::ConvertConfig;
/// use bv_geom::pipeline::convert_text;
///
/// let geometry = convert_text("⠁⠃\n⠇ ", &ConvertConfig::default()).unwrap();
/// assert_eq!(geometry.dots.len(), 1 + 2 + 3);
/// ```
pub fn convert_text(text: &str, config: &ConvertConfig) -> Result<Geometry, CoreError> {
    config.validate()?;
    let grid = Grid::parse(text);
    let trimmed = trim(&grid, config.trim_mode);
    let metrics = CellMetrics::derive(config);
    Ok(render(&trimmed.grid, &metrics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bv_core::config::{PitchMode, TrimMode};

    const EPS: f64 = 1e-9;

    fn convert(text: &str, config: &ConvertConfig) -> Geometry {
        match convert_text(text, config) {
            Ok(g) => g,
            Err(e) => panic!("conversion refusée : {e}"),
        }
    }

    #[test]
    fn single_dot_round_trip() {
        // "⠁" (bit 0 seul), pitch uniforme, step_x=2, y_ratio=2, scale=12 :
        // un seul cercle au centre colonne 0 / rangée 0, canvas 48×48.
        let config = ConvertConfig {
            pitch_mode: PitchMode::Uniform,
            step_x: 2.0,
            y_ratio: 2.0,
            scale: 12.0,
            ..ConvertConfig::default()
        };
        let geometry = convert("⠁", &config);
        assert_eq!(geometry.dots.len(), 1);
        let dot = geometry.dots[0];
        assert!((dot.cx - 0.25 * 2.0 * 12.0).abs() < EPS); // 6.0
        assert!((dot.cy - 4.0 / 8.0 * 12.0).abs() < EPS); // 6.0
        assert!((geometry.width - 48.0).abs() < EPS);
        assert!((geometry.height - 48.0).abs() < EPS);
    }

    #[test]
    fn blank_input_yields_empty_geometry() {
        let geometry = convert("  \n  ", &ConvertConfig::default());
        assert!(geometry.is_empty());
        assert_eq!(geometry.dots.len(), 0);
    }

    #[test]
    fn invalid_config_is_rejected_before_any_geometry() {
        let config = ConvertConfig {
            dot_diameter_ratio: 2.0,
            ..ConvertConfig::default()
        };
        assert!(convert_text("⠁", &config).is_err());
    }

    #[test]
    fn trimming_shrinks_canvas_but_not_dot_count() {
        let text = "    \n ⠿⠿ \n    ";
        let base = ConvertConfig::default();
        let trimmed = convert(
            text,
            &ConvertConfig {
                trim_mode: TrimMode::BoundingBox,
                ..base.clone()
            },
        );
        let untrimmed = convert(
            text,
            &ConvertConfig {
                trim_mode: TrimMode::None,
                ..base
            },
        );
        assert_eq!(trimmed.dots.len(), untrimmed.dots.len());
        assert!(trimmed.width < untrimmed.width);
        assert!(trimmed.height < untrimmed.height);
    }

    #[test]
    fn conversion_is_idempotent() {
        let config = ConvertConfig {
            pitch_mode: PitchMode::Asymmetric,
            ..ConvertConfig::default()
        };
        let text = "⠮⠥⠇⠑\n ⠛⠗ ";
        assert_eq!(convert(text, &config), convert(text, &config));
    }

    #[test]
    fn uniform_gap_equality_holds_in_rendered_coordinates() {
        // Deux cellules adjacentes pleines : l'écart entre les deux
        // colonnes d'une cellule égale l'écart au travers de la
        // frontière de cellule.
        let config = ConvertConfig {
            pitch_mode: PitchMode::Uniform,
            trim_mode: TrimMode::None,
            ..ConvertConfig::default()
        };
        let geometry = convert("⠉⠉", &config); // bits 0 et 3 : rangée 0, deux colonnes
        let mut xs: Vec<f64> = geometry.dots.iter().map(|d| d.cx).collect();
        xs.sort_by(f64::total_cmp);
        assert_eq!(xs.len(), 4);
        let intra = xs[1] - xs[0];
        let inter = xs[2] - xs[1];
        assert!((intra - inter).abs() < EPS, "intra {intra} vs inter {inter}");
    }
}
