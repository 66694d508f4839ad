use std::fmt::Write as _;

use bv_core::geometry::Geometry;

/// Document minimal émis pour une géométrie vide (art entièrement
/// blanc). Valide, zéro cercle — jamais une erreur.
const EMPTY_DOCUMENT: &str =
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 0 0" width="0"></svg>"#;

/// Sérialise la géométrie en document SVG.
///
/// L'élément racine porte le `viewBox`, l'attribut `width` déclaré, la
/// couleur de remplissage, puis un `<circle>` par point. Toutes les
/// valeurs numériques sont arrondies à 3 décimales.
///
/// # Example
/// ```
/// use bv_core::geometry::{Dot, Geometry};
/// use bv_svg::document::svg_document;
///
/// let geometry = Geometry {
///     dots: vec![Dot { cx: 6.0, cy: 6.0, r: 2.0 }],
///     width: 48.0,
///     height: 48.0,
/// };
/// let svg = svg_document(&geometry, "currentColor", "100%");
/// assert!(svg.contains(r#"viewBox="0 0 48.000 48.000""#));
/// assert!(svg.contains(r#"<circle cx="6.000" cy="6.000" r="2.000"/>"#));
/// ```
#[must_use]
pub fn svg_document(geometry: &Geometry, fill: &str, width_attr: &str) -> String {
    if geometry.is_empty() {
        return EMPTY_DOCUMENT.to_string();
    }

    // ~55 octets par cercle + l'enveloppe : évite les réallocations.
    let mut svg = String::with_capacity(256 + geometry.dots.len() * 56);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {:.3} {:.3}" width="{width_attr}" fill="{fill}" shape-rendering="geometricPrecision" preserveAspectRatio="xMidYMid meet">"#,
        geometry.width, geometry.height,
    );
    for dot in &geometry.dots {
        let _ = write!(
            svg,
            r#"<circle cx="{:.3}" cy="{:.3}" r="{:.3}"/>"#,
            dot.cx, dot.cy, dot.r,
        );
    }
    svg.push_str("</svg>");

    log::debug!("document SVG : {} cercles, {} octets", geometry.dots.len(), svg.len());
    svg
}
