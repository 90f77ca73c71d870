// src/noyau/limites.rs
//
// Garde-fous d’évaluation (anti-gel / anti-pile).
// Passés par référence à chaque appel : aucun état global.

/// Profondeur d’imbrication par défaut ('(' et signes unaires).
pub const PROFONDEUR_MAX_DEFAUT: usize = 256;

/// |exposant| max par défaut (hors bases 0, 1, -1).
pub const EXPOSANT_MAX_DEFAUT: u32 = 1_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limites {
    pub profondeur_max: usize,
    pub exposant_max: u32,
}

impl Default for Limites {
    fn default() -> Self {
        Self {
            profondeur_max: PROFONDEUR_MAX_DEFAUT,
            exposant_max: EXPOSANT_MAX_DEFAUT,
        }
    }
}

impl Limites {
    pub fn profondeur_max(mut self, max: usize) -> Self {
        self.profondeur_max = max;
        self
    }

    pub fn exposant_max(mut self, max: u32) -> Self {
        self.exposant_max = max;
        self
    }
}
