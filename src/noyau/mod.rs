//! Noyau exact Q-pur: fractions d’expressions
//!
//! Organisation interne :
//! - jetons.rs    : Scanner (paresseux) + scan_all
//! - parseur.rs   : descente récursive, évaluation immédiate (pas d’AST)
//! - puissance.rs : puissance exacte, exposant entier
//! - eval.rs      : pipeline d’UNE expression (+ démarche)
//! - fraction.rs  : paire numérateur/dénominateur
//! - format.rs    : forme canonique n/d
//! - limites.rs   : garde-fous (profondeur, exposant)
//! - erreur.rs    : erreurs typées

pub mod erreur;
pub mod eval;
pub mod format;
pub mod fraction;
pub mod jetons;
pub mod limites;
pub mod parseur;
pub mod puissance;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{Erreur, Partie};
pub use eval::{evaluer_avec_demarche, evaluer_expression, evaluer_expression_avec, DemarcheNoyau};
pub use format::format_rat;
pub use fraction::{rationnel_depuis_paire, PaireExpr};
pub use limites::Limites;
