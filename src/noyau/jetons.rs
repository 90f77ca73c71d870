// src/noyau/jetons.rs
//
// Scanner paresseux (Iterator) + matérialisation en Vec<Jeton>.
//
// Règles (dans l’ordre) :
// - suite d’espaces          => un seul Espace (jeté avant le parse)
// - "**"                     => Pow (avant le '*' simple)
// - chiffres ["." chiffres]  => Num ; "12." => Illegal("12.")
// - "." chiffres             => Num (ex: .01) ; "." seul => Illegal(".")
// - ( ) + - * / %            => opérateurs
// - tout le reste            => Illegal(caractère)

use std::fmt;

use log::trace;

use super::erreur::Erreur;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tok {
    Fin,
    Espace,
    Num,

    LPar,
    RPar,

    Plus,
    Minus,
    Star,
    Slash,
    Pow, // **
    Percent,

    Illegal,
}

impl Tok {
    pub fn nom(self) -> &'static str {
        match self {
            Tok::Fin => "FIN",
            Tok::Espace => "ESPACE",
            Tok::Num => "NUM",
            Tok::LPar => "LPAR",
            Tok::RPar => "RPAR",
            Tok::Plus => "PLUS",
            Tok::Minus => "MINUS",
            Tok::Star => "STAR",
            Tok::Slash => "SLASH",
            Tok::Pow => "POW",
            Tok::Percent => "PERCENT",
            Tok::Illegal => "ILLEGAL",
        }
    }
}

/// Un jeton : genre + texte exact reconnu + position (en caractères) du début.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Jeton {
    pub tok: Tok,
    pub texte: String,
    pub pos: usize,
}

impl Jeton {
    pub(crate) fn new(tok: Tok, texte: impl Into<String>, pos: usize) -> Self {
        Self {
            tok,
            texte: texte.into(),
            pos,
        }
    }
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Jeton({}, {:?})", self.tok.nom(), self.texte)
    }
}

/// Scanner : un curseur sur les caractères, rien d’autre.
/// Émet exactement un `Fin` puis s’arrête.
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    fini: bool,
}

impl Scanner {
    pub fn new(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
            pos: 0,
            fini: false,
        }
    }

    fn est_chiffre(&self, i: usize) -> bool {
        i < self.chars.len() && self.chars[i].is_ascii_digit()
    }

    fn avance_chiffres(&mut self) {
        while self.est_chiffre(self.pos) {
            self.pos += 1;
        }
    }

    fn texte(&self, start: usize) -> String {
        self.chars[start..self.pos].iter().collect()
    }

    fn scan(&mut self) -> Jeton {
        let start = self.pos;
        let Some(&c) = self.chars.get(start) else {
            return Jeton::new(Tok::Fin, "", start);
        };

        if c.is_whitespace() {
            while self.pos < self.chars.len() && self.chars[self.pos].is_whitespace() {
                self.pos += 1;
            }
            return Jeton::new(Tok::Espace, self.texte(start), start);
        }

        if c == '*' && self.chars.get(start + 1) == Some(&'*') {
            self.pos += 2;
            return Jeton::new(Tok::Pow, "**", start);
        }

        // Nombre : 12, 12.5
        if c.is_ascii_digit() {
            self.avance_chiffres();
            if self.chars.get(self.pos) == Some(&'.') {
                if !self.est_chiffre(self.pos + 1) {
                    // "12." : le point et ce qui précède sont signalés, pas ignorés
                    self.pos += 1;
                    return Jeton::new(Tok::Illegal, self.texte(start), start);
                }
                self.pos += 1;
                self.avance_chiffres();
            }
            return Jeton::new(Tok::Num, self.texte(start), start);
        }

        // Nombre : .01
        if c == '.' {
            self.pos += 1;
            if !self.est_chiffre(self.pos) {
                return Jeton::new(Tok::Illegal, ".", start);
            }
            self.avance_chiffres();
            return Jeton::new(Tok::Num, self.texte(start), start);
        }

        self.pos += 1;
        let tok = match c {
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            '+' => Tok::Plus,
            '-' => Tok::Minus,
            '*' => Tok::Star,
            '/' => Tok::Slash,
            '%' => Tok::Percent,
            _ => Tok::Illegal,
        };
        Jeton::new(tok, c.to_string(), start)
    }
}

impl Iterator for Scanner {
    type Item = Jeton;

    fn next(&mut self) -> Option<Jeton> {
        if self.fini {
            return None;
        }
        let j = self.scan();
        if j.tok == Tok::Fin {
            self.fini = true;
        }
        Some(j)
    }
}

/// Vide le scanner : jette les espaces, garde le `Fin` final,
/// échoue au premier jeton illégal.
pub fn scan_all(s: &str) -> Result<Vec<Jeton>, Erreur> {
    let mut out = Vec::new();
    for j in Scanner::new(s) {
        match j.tok {
            Tok::Illegal => {
                return Err(Erreur::JetonIllegal {
                    fragment: j.texte,
                    pos: j.pos,
                })
            }
            Tok::Espace => {}
            _ => out.push(j),
        }
    }
    trace!("scan_all({s:?}) : {} jetons", out.len());
    Ok(out)
}

/// Format utilitaire (démarche) : textes des jetons séparés par des espaces.
pub fn format_tokens(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .filter(|j| j.tok != Tok::Fin)
        .map(|j| j.texte.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
