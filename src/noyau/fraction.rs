// src/noyau/fraction.rs
//
// Paire numérateur/dénominateur -> un seul rationnel.
// - numérateur vide (ou blanc)          => erreur
// - dénominateur "" ou "1" (après trim) => pas de division
// - sinon num / den, den == 0           => erreur

use std::fmt;

use log::debug;
use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::{Erreur, Partie};
use super::eval::evaluer_expression_avec;
use super::limites::Limites;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaireExpr {
    pub numerateur: String,
    pub denominateur: String,
}

impl fmt::Display for PaireExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PaireExpr(num: {:?}, denom: {:?})",
            self.numerateur, self.denominateur
        )
    }
}

impl PaireExpr {
    pub fn new(numerateur: impl Into<String>, denominateur: impl Into<String>) -> Self {
        Self {
            numerateur: numerateur.into(),
            denominateur: denominateur.into(),
        }
    }

    pub fn evaluer(&self) -> Result<BigRational, Erreur> {
        self.evaluer_avec(&Limites::default())
    }

    pub fn evaluer_avec(&self, limites: &Limites) -> Result<BigRational, Erreur> {
        if self.numerateur.trim().is_empty() {
            return Err(Erreur::NumerateurVide);
        }

        let num = evaluer_expression_avec(&self.numerateur, limites)
            .map_err(|e| e.avec_partie(Partie::Numerateur, &self.numerateur))?;

        if self.denominateur_identite() {
            debug!("{} : dénominateur identité, num = {num}", self);
            return Ok(num);
        }

        let den = evaluer_expression_avec(&self.denominateur, limites)
            .map_err(|e| e.avec_partie(Partie::Denominateur, &self.denominateur))?;
        if den.is_zero() {
            return Err(Erreur::DenominateurNul);
        }

        debug!("{} : {num} / {den}", self);
        Ok(num / den)
    }

    fn denominateur_identite(&self) -> bool {
        matches!(self.denominateur.trim(), "" | "1")
    }
}

/// Point d’entrée à deux chaînes (numérateur, dénominateur).
pub fn rationnel_depuis_paire(numerateur: &str, denominateur: &str) -> Result<BigRational, Erreur> {
    PaireExpr::new(numerateur, denominateur).evaluer()
}
