//! Fractions exactes Q-pur : "numérateur" / "dénominateur" -> rationnel réduit.
//!
//! ```
//! use fraction_qpur::{format_rat, rationnel_depuis_paire};
//!
//! let r = rationnel_depuis_paire("(10 + 100) * 3", "30").unwrap();
//! assert_eq!(format_rat(&r), "11");
//! ```

pub mod noyau;

pub use noyau::{
    evaluer_avec_demarche, evaluer_expression, evaluer_expression_avec, format_rat,
    rationnel_depuis_paire, DemarcheNoyau, Erreur, Limites, PaireExpr, Partie,
};
