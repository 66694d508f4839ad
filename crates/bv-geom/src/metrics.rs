use bv_core::config::ConvertConfig;

/// Métriques de cellule résolues depuis la config : pas, centres
/// intra-cellule, les quatre écarts dérivés et le rayon de point.
///
/// Dérivation pure sur une config déjà validée — ne peut pas échouer.
/// Toutes les valeurs sont en unités abstraites ; le facteur `scale`
/// n'est appliqué qu'au rendu.
///
/// # Example
/// ```
/// use bv_core::config::ConvertConfig;
/// use bv_geom::metrics::CellMetrics;
///
/// let m = CellMetrics::derive(&ConvertConfig::default());
/// assert!(m.radius < m.smallest_gap() / 2.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CellMetrics {
    /// Largeur de cellule.
    pub step_x: f64,
    /// Hauteur de cellule (`step_x * y_ratio`).
    pub step_y: f64,
    /// Pixels par unité abstraite.
    pub scale: f64,
    /// Centres X des deux colonnes de points, relatifs au bord gauche.
    pub cx_base: [f64; 2],
    /// Centres Y des quatre rangées de points, relatifs au bord haut.
    pub cy_base: [f64; 4],
    /// Écart horizontal entre les deux colonnes d'une même cellule.
    pub intra_gap_x: f64,
    /// Écart horizontal entre colonnes de cellules adjacentes.
    pub inter_gap_x: f64,
    /// Écart vertical entre rangées d'une même cellule.
    pub intra_gap_y: f64,
    /// Écart vertical entre rangées de cellules adjacentes.
    pub inter_gap_y: f64,
    /// Rayon de point, dérivé du plus petit des quatre écarts.
    pub radius: f64,
}

impl CellMetrics {
    /// Résout le mode de pitch en nombres concrets.
    ///
    /// Les marges contrôlent directement l'écart entre cellules :
    ///   `inter_x = 2·m_x`, `intra_x = step_x − 2·m_x`
    ///   `inter_y = 2·m_y`, `intra_y = (step_y − 2·m_y) / 3`
    /// Le pitch uniforme est le couple de marges (0.25, 0.125), qui rend
    /// intra == inter sur chaque axe par construction.
    #[must_use]
    pub fn derive(config: &ConvertConfig) -> Self {
        let step_x = config.step_x;
        let step_y = config.step_y();
        let (mx_ratio, my_ratio) = config.margin_ratios();

        // Marge du bord de cellule au premier/dernier centre.
        let m_x = step_x * mx_ratio;
        let m_y = step_y * my_ratio;

        let intra_gap_x = step_x - 2.0 * m_x;
        let inter_gap_x = 2.0 * m_x;
        let intra_gap_y = (step_y - 2.0 * m_y) / 3.0;
        let inter_gap_y = 2.0 * m_y;

        let cx_base = [m_x, step_x - m_x];
        let cy_base = std::array::from_fn(|i| m_y + i as f64 * intra_gap_y);

        // Rayon tiré de l'écart le plus serré : les cercles ne se
        // touchent jamais, même dans la direction la plus dense.
        let smallest = intra_gap_x
            .min(inter_gap_x)
            .min(intra_gap_y)
            .min(inter_gap_y);
        let radius = smallest * (config.dot_diameter_ratio / 2.0);

        Self {
            step_x,
            step_y,
            scale: config.scale,
            cx_base,
            cy_base,
            intra_gap_x,
            inter_gap_x,
            intra_gap_y,
            inter_gap_y,
            radius,
        }
    }

    /// Le plus petit des quatre écarts dérivés.
    #[must_use]
    pub fn smallest_gap(&self) -> f64 {
        self.intra_gap_x
            .min(self.inter_gap_x)
            .min(self.intra_gap_y)
            .min(self.inter_gap_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bv_core::config::PitchMode;

    const EPS: f64 = 1e-12;

    fn uniform(step_x: f64, y_ratio: f64) -> ConvertConfig {
        ConvertConfig {
            pitch_mode: PitchMode::Uniform,
            step_x,
            y_ratio,
            ..ConvertConfig::default()
        }
    }

    #[test]
    fn uniform_pitch_equalizes_intra_and_inter() {
        for (sx, yr) in [(2.0, 1.0), (3.0, 2.0), (0.5, 4.0), (7.3, 0.9)] {
            let m = CellMetrics::derive(&uniform(sx, yr));
            assert!((m.intra_gap_x - m.inter_gap_x).abs() < EPS, "x: {sx}/{yr}");
            assert!((m.intra_gap_y - m.inter_gap_y).abs() < EPS, "y: {sx}/{yr}");
            // Et l'écart vaut le pas sur deux (resp. quatre).
            assert!((m.intra_gap_x - sx / 2.0).abs() < EPS);
            assert!((m.intra_gap_y - sx * yr / 4.0).abs() < EPS);
        }
    }

    #[test]
    fn uniform_centers_sit_at_quarters_and_eighths() {
        let m = CellMetrics::derive(&uniform(2.0, 2.0));
        assert!((m.cx_base[0] - 0.5).abs() < EPS); // 25 % de 2.0
        assert!((m.cx_base[1] - 1.5).abs() < EPS); // 75 % de 2.0
        for (i, cy) in m.cy_base.iter().enumerate() {
            let expected = 4.0 * (2.0 * i as f64 + 1.0) / 8.0;
            assert!((cy - expected).abs() < EPS, "rangée {i}");
        }
    }

    #[test]
    fn wider_margin_widens_inter_and_narrows_intra() {
        let base = ConvertConfig {
            pitch_mode: PitchMode::Asymmetric,
            ..ConvertConfig::default()
        };
        let narrow = CellMetrics::derive(&ConvertConfig {
            margin_x_ratio: 0.26,
            ..base.clone()
        });
        let wide = CellMetrics::derive(&ConvertConfig {
            margin_x_ratio: 0.32,
            ..base
        });
        assert!(wide.inter_gap_x > narrow.inter_gap_x);
        assert!(wide.intra_gap_x < narrow.intra_gap_x);
    }

    #[test]
    fn radius_never_reaches_half_of_any_gap() {
        let configs = [
            uniform(2.0, 1.0),
            uniform(3.0, 2.0),
            ConvertConfig {
                pitch_mode: PitchMode::Asymmetric,
                margin_x_ratio: 0.28,
                margin_y_ratio: 0.15,
                dot_diameter_ratio: 0.95,
                ..ConvertConfig::default()
            },
            ConvertConfig {
                pitch_mode: PitchMode::Asymmetric,
                margin_x_ratio: 0.05,
                margin_y_ratio: 0.45,
                ..ConvertConfig::default()
            },
        ];
        for config in configs {
            assert!(config.validate().is_ok());
            let m = CellMetrics::derive(&config);
            for gap in [m.intra_gap_x, m.inter_gap_x, m.intra_gap_y, m.inter_gap_y] {
                assert!(m.radius < gap / 2.0, "radius {} vs gap {gap}", m.radius);
            }
        }
    }

    #[test]
    fn asymmetric_matches_hand_computed_values() {
        let config = ConvertConfig {
            pitch_mode: PitchMode::Asymmetric,
            step_x: 2.0,
            y_ratio: 1.0,
            margin_x_ratio: 0.28,
            margin_y_ratio: 0.150,
            ..ConvertConfig::default()
        };
        let m = CellMetrics::derive(&config);
        // m_x = 0.56, m_y = 0.30
        assert!((m.inter_gap_x - 1.12).abs() < EPS);
        assert!((m.intra_gap_x - 0.88).abs() < EPS);
        assert!((m.inter_gap_y - 0.60).abs() < EPS);
        assert!((m.intra_gap_y - 1.4 / 3.0).abs() < EPS);
        assert!((m.cx_base[0] - 0.56).abs() < EPS);
        assert!((m.cx_base[1] - 1.44).abs() < EPS);
    }
}
