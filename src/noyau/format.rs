// src/noyau/format.rs

use num_rational::BigRational;
use num_traits::One;

/// Forme canonique : "n" si dénominateur 1, sinon "n/d" (toujours réduit, d > 0).
/// Relue par le parseur, elle redonne la même valeur.
pub fn format_rat(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}
