//! Topologie du bloc Unicode Braille (U+2800–U+28FF).
//!
//! Bits activés :
//! +---+---+
//! | 1 | 4 |
//! +---+---+
//! | 2 | 5 |
//! +---+---+
//! | 3 | 6 |
//! +---+---+
//! | 7 | 8 |
//! +---+---+

/// Braille base codepoint (U+2800).
pub const BRAILLE_BASE: u32 = 0x2800;

/// Last codepoint of the braille block (U+28FF).
pub const BRAILLE_LAST: u32 = 0x28FF;

/// Position (colonne, rangée) intra-cellule de chaque bit du masque.
///
/// Dot numbering to bit mapping:
/// dot 1 → bit 0, dot 2 → bit 1, dot 3 → bit 2,
/// dot 4 → bit 3, dot 5 → bit 4, dot 6 → bit 5,
/// dot 7 → bit 6, dot 8 → bit 7
///
/// L'ordre n'est PAS row-major : les bits 0–2 descendent la colonne
/// gauche, les bits 3–5 la colonne droite, puis 6/7 ferment la rangée 4.
pub const DOT_OFFSETS: [(u8, u8); 8] = [
    (0, 0), // dot 1
    (0, 1), // dot 2
    (0, 2), // dot 3
    (1, 0), // dot 4
    (1, 1), // dot 5
    (1, 2), // dot 6
    (0, 3), // dot 7
    (1, 3), // dot 8
];

/// Extrait le masque 8-bits d'un caractère Braille.
///
/// Tout caractère hors du bloc U+2800–U+28FF (espace compris) vaut 0 :
/// il ne contribue aucun point.
///
/// # Example
/// ```
/// use bv_core::braille::dot_mask;
/// assert_eq!(dot_mask('\u{2801}'), 0b0000_0001); // dot 1
/// assert_eq!(dot_mask('\u{28FF}'), 0xFF);        // full cell
/// assert_eq!(dot_mask(' '), 0);
/// assert_eq!(dot_mask('x'), 0);
/// ```
#[must_use]
#[inline(always)]
pub const fn dot_mask(ch: char) -> u8 {
    let code = ch as u32;
    match code {
        BRAILLE_BASE..=BRAILLE_LAST => (code - BRAILLE_BASE) as u8,
        _ => 0,
    }
}

/// Map un entier 8-bits (0 à 255) vers le caractère Braille correspondant.
/// Calcule mathématiquement le point de code `U+2800 + masque`.
#[must_use]
#[inline(always)]
pub const fn braille_char(mask: u8) -> char {
    // Le bloc Unicode Braille est parfaitement mappé bit à bit sur l'offset 0x2800.
    match char::from_u32(BRAILLE_BASE + mask as u32) {
        Some(c) => c,
        None => ' ',
    }
}

/// Vrai si le caractère est un blanc au sens du trim : espace ou la
/// cellule Braille vide U+2800.
#[must_use]
#[inline(always)]
pub const fn is_blank(ch: char) -> bool {
    ch == ' ' || ch as u32 == BRAILLE_BASE
}

/// Vrai si le caractère porte au moins un point levé.
#[must_use]
#[inline(always)]
pub const fn is_occupied(ch: char) -> bool {
    dot_mask(ch) != 0
}
