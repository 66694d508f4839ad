use bv_core::braille::{is_blank, is_occupied};
use bv_core::config::TrimMode;
use bv_core::grid::Grid;

/// Résultat du trim : la grille recadrée et les offsets d'origine.
///
/// `left`/`top` sont informatifs — le rendu n'en a pas besoin, ils
/// disent seulement où le recadrage se situait dans la grille source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trimmed {
    /// Grille recadrée, lignes réindexées depuis 0.
    pub grid: Grid,
    /// Première colonne conservée de la grille source.
    pub left: usize,
    /// Première ligne conservée de la grille source.
    pub top: usize,
}

/// Recadre la grille selon le mode demandé.
///
/// Une grille entièrement blanche donne la grille vide 0×0 — jamais une
/// erreur. Voir [`TrimMode`] pour la sémantique des trois modes.
///
/// # Example
/// ```
/// use bv_core::config::TrimMode;
/// use bv_core::grid::Grid;
/// use bv_geom::trim::trim;
///
/// let grid = Grid::parse("  \n ⠁");
/// let out = trim(&grid, TrimMode::BoundingBox);
/// assert_eq!((out.grid.width, out.grid.height), (1, 1));
/// assert_eq!((out.left, out.top), (1, 1));
/// ```
#[must_use]
pub fn trim(grid: &Grid, mode: TrimMode) -> Trimmed {
    match mode {
        TrimMode::None => Trimmed {
            grid: grid.clone(),
            left: 0,
            top: 0,
        },
        TrimMode::EdgeBlank => trim_edge_blank(grid),
        TrimMode::BoundingBox => trim_bounding_box(grid),
    }
}

/// Rectangle minimal couvrant toutes les cellules occupées.
///
/// Occupé = point de code Braille avec masque non nul. Les espaces,
/// U+2800 et les caractères hors bloc Braille ne comptent jamais.
fn trim_bounding_box(grid: &Grid) -> Trimmed {
    let mut bounds: Option<(usize, usize, usize, usize)> = None;
    for y in 0..grid.height {
        for x in 0..grid.width {
            if is_occupied(grid.get(x, y)) {
                bounds = Some(match bounds {
                    None => (y, y, x, x),
                    // Balayage en ordre de lignes : y croît toujours.
                    Some((top, _, left, right)) => (top, y, left.min(x), right.max(x)),
                });
            }
        }
    }

    match bounds {
        None => Trimmed {
            grid: Grid::empty(),
            left: 0,
            top: 0,
        },
        Some((top, bottom, left, right)) => Trimmed {
            grid: grid.sub_grid(left, top, right - left + 1, bottom - top + 1),
            left,
            top,
        },
    }
}

/// Pare les lignes/colonnes entièrement blanches depuis les quatre
/// bords, indépendamment, en s'arrêtant à la première non blanche.
///
/// La blancheur est jugée sur les caractères (espace ou U+2800) : un
/// caractère hors Braille sans aucun point bloque ce mode alors qu'il
/// est invisible pour le bounding-box. Les blancs internes restent.
fn trim_edge_blank(grid: &Grid) -> Trimmed {
    if grid.is_empty() {
        return Trimmed {
            grid: Grid::empty(),
            left: 0,
            top: 0,
        };
    }

    let blank_row = |y: usize| (0..grid.width).all(|x| is_blank(grid.get(x, y)));
    let blank_col = |x: usize| (0..grid.height).all(|y| is_blank(grid.get(x, y)));

    let Some(top) = (0..grid.height).find(|&y| !blank_row(y)) else {
        return Trimmed {
            grid: Grid::empty(),
            left: 0,
            top: 0,
        };
    };
    // Au moins une ligne non blanche existe : les scans inverses aboutissent.
    let bottom = (0..grid.height).rev().find(|&y| !blank_row(y)).unwrap_or(top);
    let left = (0..grid.width).find(|&x| !blank_col(x)).unwrap_or(0);
    let right = (0..grid.width).rev().find(|&x| !blank_col(x)).unwrap_or(left);

    Trimmed {
        grid: grid.sub_grid(left, top, right - left + 1, bottom - top + 1),
        left,
        top,
    }
}
