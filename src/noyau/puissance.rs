// src/noyau/puissance.rs
//
// Puissance exacte sur Q : exposant entier seulement.
// - exp >= 0 : (n/d)^e = n^e / d^e   (x^0 = 1, y compris 0^0)
// - exp <  0 : (n/d)^e = d^|e| / n^|e|
// - 0^(négatif) : refusé avant tout calcul

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::erreur::Erreur;
use super::limites::Limites;

pub fn puissance(
    base: &BigRational,
    exposant: &BigRational,
    limites: &Limites,
) -> Result<BigRational, Erreur> {
    if !exposant.is_integer() {
        return Err(Erreur::ExposantNonEntier);
    }
    let e = exposant.numer();
    if base.is_zero() && e.is_negative() {
        return Err(Erreur::ZeroPuissanceNegative);
    }

    // Bases triviales : résultat connu quel que soit |e| (pas de garde-fou).
    if e.is_zero() || base.is_one() {
        return Ok(BigRational::one());
    }
    if base.is_zero() {
        return Ok(BigRational::zero());
    }
    if base.is_integer() && base.numer().abs().is_one() {
        // base = -1
        return Ok(if (e % BigInt::from(2u8)).is_zero() {
            BigRational::one()
        } else {
            -BigRational::one()
        });
    }

    let abs_e = exposant_borne(e, limites.exposant_max)?;
    let (n, d) = (base.numer(), base.denom());

    let (num, den) = if e.is_positive() {
        (n.pow(abs_e), d.pow(abs_e))
    } else {
        (d.pow(abs_e), n.pow(abs_e))
    };
    if den.is_zero() {
        return Err(Erreur::DenominateurNulPuissance);
    }

    // BigRational::new réduit et remet le signe au numérateur.
    Ok(BigRational::new(num, den))
}

/// |e| en u32, dans la limite configurée.
fn exposant_borne(e: &BigInt, max: u32) -> Result<u32, Erreur> {
    match e.abs().to_u32() {
        Some(v) if v <= max => Ok(v),
        _ => Err(Erreur::ExposantTropGrand { max }),
    }
}
