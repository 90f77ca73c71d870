// src/noyau/erreur.rs
//
// Erreurs du noyau : un seul enum, tout est fail-fast.
// Les variantes “contexte” (Operande, Partie, ParentheseNonFermee) gardent
// la cause d’origine en `source()` : on ajoute du contexte, on ne remplace rien.

use thiserror::Error;

/// Côté de la paire numérateur/dénominateur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Partie {
    Numerateur,
    Denominateur,
}

impl std::fmt::Display for Partie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Partie::Numerateur => f.write_str("numérateur"),
            Partie::Denominateur => f.write_str("dénominateur"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Erreur {
    /* ------------------------ Lexique ------------------------ */
    #[error("jeton illégal {fragment:?} près de la position {pos}")]
    JetonIllegal { fragment: String, pos: usize },

    #[error("nombre invalide {texte:?} à la position {pos}")]
    NombreInvalide { texte: String, pos: usize },

    /* ------------------------ Syntaxe ------------------------ */
    #[error("fin d’entrée inattendue à la position {pos} (attendu : {attendu})")]
    FinInattendue { pos: usize, attendu: &'static str },

    #[error("jeton inattendu {jeton} à la position {pos} (attendu : {attendu})")]
    JetonInattendu {
        jeton: String,
        pos: usize,
        attendu: &'static str,
    },

    #[error("parenthèse fermante manquante (ouverte à la position {ouverture})")]
    ParentheseNonFermee {
        ouverture: usize,
        #[source]
        cause: Box<Erreur>,
    },

    #[error("jetons en trop à partir de {jeton} (position {pos})")]
    JetonsEnTrop { jeton: String, pos: usize },

    #[error("opérande droite de '{operateur}' invalide (position {pos})")]
    Operande {
        operateur: &'static str,
        pos: usize,
        #[source]
        cause: Box<Erreur>,
    },

    /* ------------------------ Entrée vide ------------------------ */
    #[error("numérateur vide")]
    NumerateurVide,

    #[error("aucune expression évaluable dans {0:?}")]
    ExpressionVide(String),

    /* ------------------------ Arithmétique ------------------------ */
    #[error("division par zéro ('/' à la position {pos})")]
    DivisionParZero { pos: usize },

    #[error("modulo par zéro ('%' à la position {pos})")]
    ModuloParZero { pos: usize },

    #[error("le modulo exige des opérandes entiers ('%' à la position {pos})")]
    ModuloNonEntier { pos: usize },

    #[error("l’exposant doit être entier")]
    ExposantNonEntier,

    #[error("0 élevé à une puissance négative")]
    ZeroPuissanceNegative,

    #[error("division par zéro dans le calcul de puissance")]
    DenominateurNulPuissance,

    #[error("dénominateur nul")]
    DenominateurNul,

    /* ------------------------ Garde-fous ------------------------ */
    #[error("exposant trop grand (|exposant| max : {max})")]
    ExposantTropGrand { max: u32 },

    #[error("imbrication trop profonde (max : {max}) à la position {pos}")]
    ProfondeurMax { max: usize, pos: usize },

    /* ------------------------ Contexte paire ------------------------ */
    #[error("évaluation du {partie} {texte:?} impossible")]
    Partie {
        partie: Partie,
        texte: String,
        #[source]
        cause: Box<Erreur>,
    },
}

impl Erreur {
    /// Retire le contexte (Partie, Operande) pour matcher le genre d’erreur.
    /// ParentheseNonFermee est un genre à part entière : on s’y arrête.
    pub fn noyau(&self) -> &Erreur {
        match self {
            Erreur::Partie { cause, .. } | Erreur::Operande { cause, .. } => cause.noyau(),
            autre => autre,
        }
    }

    /// Cause la plus profonde (suit toute la chaîne, parenthèses comprises).
    pub fn racine(&self) -> &Erreur {
        match self {
            Erreur::Partie { cause, .. }
            | Erreur::Operande { cause, .. }
            | Erreur::ParentheseNonFermee { cause, .. } => cause.racine(),
            autre => autre,
        }
    }

    pub(crate) fn avec_partie(self, partie: Partie, texte: &str) -> Erreur {
        Erreur::Partie {
            partie,
            texte: texte.to_string(),
            cause: Box::new(self),
        }
    }
}
