//! Noyau: évaluation d’UNE expression (pipeline réel)
//!
//! texte -> jetons (scan_all) -> descente récursive -> BigRational réduit
//!
//! Un Scanner/Parseur par appel, jeté ensuite : aucun état partagé,
//! appels concurrents sans verrou.

use num_rational::BigRational;

use super::erreur::Erreur;
use super::format::format_rat;
use super::jetons::{format_tokens, scan_all, Jeton, Tok};
use super::limites::Limites;
use super::parseur::Parseur;

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub resultat: String,
    pub note: String,
}

/// API publique : évalue une expression avec les limites par défaut.
pub fn evaluer_expression(expr_str: &str) -> Result<BigRational, Erreur> {
    evaluer_expression_avec(expr_str, &Limites::default())
}

pub fn evaluer_expression_avec(expr_str: &str, limites: &Limites) -> Result<BigRational, Erreur> {
    let jetons = jetons_evaluables(expr_str)?;
    Parseur::new(&jetons, limites).parse_complet()
}

/// Comme `evaluer_expression_avec`, plus la démarche (jetons + forme canonique).
pub fn evaluer_avec_demarche(
    expr_str: &str,
    limites: &Limites,
) -> Result<(BigRational, DemarcheNoyau), Erreur> {
    let jetons = jetons_evaluables(expr_str)?;
    let v = Parseur::new(&jetons, limites).parse_complet()?;

    let d = DemarcheNoyau {
        jetons: format_tokens(&jetons),
        resultat: format_rat(&v),
        note: "Pipeline: jetons → descente récursive (évaluation immédiate) → rationnel réduit.".into(),
    };
    Ok((v, d))
}

/// Jetons d’une expression non vide (au moins un jeton avant `Fin`).
fn jetons_evaluables(expr_str: &str) -> Result<Vec<Jeton>, Erreur> {
    let jetons = scan_all(expr_str)?;
    if jetons.iter().all(|j| j.tok == Tok::Fin) {
        return Err(Erreur::ExpressionVide(expr_str.to_string()));
    }
    Ok(jetons)
}
