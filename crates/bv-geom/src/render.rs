use bv_core::braille::{dot_mask, DOT_OFFSETS};
use bv_core::geometry::{Dot, Geometry};
use bv_core::grid::Grid;

use crate::metrics::CellMetrics;

/// Balaye la grille et produit un cercle par point levé, plus les
/// dimensions du canvas.
///
/// Pour une cellule en (x, y) : offset de base `(x·step_x, y·step_y)` ;
/// chaque bit levé y ajoute le centre intra-cellule de sa position,
/// le tout multiplié par `scale`. Les caractères sans masque (espaces,
/// hors bloc Braille) ne produisent rien — jamais une erreur.
///
/// Une grille vide donne [`Geometry::empty`] sans toucher à la
/// géométrie (pas de division ni d'indexation sur des dimensions
/// nulles).
///
/// # Example
/// ```
/// use bv_core::config::ConvertConfig;
/// use bv_core::grid::Grid;
/// use bv_geom::metrics::CellMetrics;
/// use bv_geom::render::render;
///
/// let grid = Grid::parse("⠁");
/// let metrics = CellMetrics::derive(&ConvertConfig::default());
/// let geometry = render(&grid, &metrics);
/// assert_eq!(geometry.dots.len(), 1);
/// ```
#[must_use]
pub fn render(grid: &Grid, metrics: &CellMetrics) -> Geometry {
    if grid.is_empty() {
        return Geometry::empty();
    }

    let scale = metrics.scale;
    let r = metrics.radius * scale;

    let mut dots = Vec::new();
    for y in 0..grid.height {
        let base_y = y as f64 * metrics.step_y;
        for x in 0..grid.width {
            let mask = dot_mask(grid.get(x, y));
            if mask == 0 {
                continue;
            }
            let base_x = x as f64 * metrics.step_x;
            for (bit, &(dx, dy)) in DOT_OFFSETS.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    dots.push(Dot {
                        cx: (base_x + metrics.cx_base[dx as usize]) * scale,
                        cy: (base_y + metrics.cy_base[dy as usize]) * scale,
                        r,
                    });
                }
            }
        }
    }

    log::debug!(
        "rendu : {}×{} cellules → {} cercles",
        grid.width,
        grid.height,
        dots.len()
    );

    Geometry {
        dots,
        width: grid.width as f64 * metrics.step_x * scale,
        height: grid.height as f64 * metrics.step_y * scale,
    }
}
