// src/noyau/format.rs

use super::expr::Nombre;

/// Affichage d’un résultat.
/// - Entier : tel quel.
/// - Réel mathématiquement entier : forme entière, sans ".0" (8/2 → "4").
/// - Réel quelconque : représentation flottante native de Rust
///   (précision d’affichage volontairement non fixée).
pub fn format_nombre(n: Nombre) -> String {
    match n {
        Nombre::Entier(v) => v.to_string(),
        Nombre::Reel(x) => {
            if x == 0.0 {
                // couvre -0.0
                "0".to_string()
            } else if x.is_finite() && x == x.trunc() {
                format!("{x:.0}")
            } else {
                format!("{x}")
            }
        }
    }
}
