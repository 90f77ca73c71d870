// src/noyau/parseur.rs
//
// Descente récursive, un niveau par précédence, évaluation immédiate :
// chaque niveau rend directement un BigRational (pas d’AST).
//
//   expression := term (('+' | '-') term)*          gauche
//   term       := power (('*' | '/' | '%') power)*  gauche
//   power      := unary ('**' power)?               droite : 2**3**2 = 2**9
//   unary      := ('+' | '-') unary | atom          -2**2 = (-2)**2
//   atom       := NUM | '(' expression ')'
//
// Profondeur : chaque '(' , signe unaire ou '**' compte un niveau,
// borné par Limites::profondeur_max (pas de débordement de pile).

use log::debug;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::Erreur;
use super::jetons::{Jeton, Tok};
use super::limites::Limites;
use super::puissance::puissance;

const ATTENDU_ATOME: &str = "un nombre ou '('";

pub struct Parseur<'a> {
    jetons: &'a [Jeton],
    pos: usize,
    fin: Jeton,
    limites: &'a Limites,
    profondeur: usize,
}

impl<'a> Parseur<'a> {
    pub fn new(jetons: &'a [Jeton], limites: &'a Limites) -> Self {
        let fin = match jetons.last() {
            Some(j) if j.tok == Tok::Fin => j.clone(),
            Some(j) => Jeton::new(Tok::Fin, "", j.pos + j.texte.chars().count()),
            None => Jeton::new(Tok::Fin, "", 0),
        };
        Self {
            jetons,
            pos: 0,
            fin,
            limites,
            profondeur: 0,
        }
    }

    /// Parse une expression complète : tous les jetons doivent être consommés.
    pub fn parse_complet(&mut self) -> Result<BigRational, Erreur> {
        let v = self.parse_expression()?;
        let j = self.peek();
        if j.tok != Tok::Fin {
            return Err(Erreur::JetonsEnTrop {
                jeton: j.to_string(),
                pos: j.pos,
            });
        }
        debug!("parse_complet : {} jetons -> {v}", self.pos);
        Ok(v)
    }

    /* ------------------------ Curseur ------------------------ */

    fn peek(&self) -> &Jeton {
        self.jetons.get(self.pos).unwrap_or(&self.fin)
    }

    fn avance(&mut self) {
        if self.pos < self.jetons.len() {
            self.pos += 1;
        }
    }

    fn attendre(&mut self, tok: Tok, attendu: &'static str) -> Result<(), Erreur> {
        let j = self.peek();
        if j.tok == tok {
            self.avance();
            return Ok(());
        }
        Err(inattendu(j, attendu))
    }

    fn entrer(&mut self, pos: usize) -> Result<(), Erreur> {
        if self.profondeur >= self.limites.profondeur_max {
            return Err(Erreur::ProfondeurMax {
                max: self.limites.profondeur_max,
                pos,
            });
        }
        self.profondeur += 1;
        Ok(())
    }

    fn sortir(&mut self) {
        self.profondeur -= 1;
    }

    /* ------------------------ Niveaux ------------------------ */

    pub fn parse_expression(&mut self) -> Result<BigRational, Erreur> {
        let mut lhs = self.parse_term()?;

        loop {
            let (op, pos) = match self.peek() {
                j if j.tok == Tok::Plus => ("+", j.pos),
                j if j.tok == Tok::Minus => ("-", j.pos),
                _ => return Ok(lhs),
            };
            self.avance();
            let rhs = self.parse_term().map_err(|e| operande(op, pos, e))?;

            if op == "+" {
                lhs += rhs;
            } else {
                lhs -= rhs;
            }
        }
    }

    fn parse_term(&mut self) -> Result<BigRational, Erreur> {
        let mut lhs = self.parse_power()?;

        loop {
            let (tok, pos) = {
                let j = self.peek();
                (j.tok, j.pos)
            };
            let op = match tok {
                Tok::Star => "*",
                Tok::Slash => "/",
                Tok::Percent => "%",
                _ => return Ok(lhs),
            };
            self.avance();
            let rhs = self.parse_power().map_err(|e| operande(op, pos, e))?;

            match tok {
                Tok::Star => lhs *= rhs,
                Tok::Slash => {
                    if rhs.is_zero() {
                        return Err(Erreur::DivisionParZero { pos });
                    }
                    lhs /= rhs;
                }
                _ => lhs = modulo(&lhs, &rhs, pos)?,
            }
        }
    }

    fn parse_power(&mut self) -> Result<BigRational, Erreur> {
        let base = self.parse_unary()?;

        let pos = match self.peek() {
            j if j.tok == Tok::Pow => j.pos,
            _ => return Ok(base),
        };
        self.avance();

        self.entrer(pos)?;
        let exposant = self.parse_power();
        self.sortir();
        let exposant = exposant.map_err(|e| operande("**", pos, e))?;

        puissance(&base, &exposant, self.limites)
    }

    fn parse_unary(&mut self) -> Result<BigRational, Erreur> {
        let (tok, pos) = {
            let j = self.peek();
            (j.tok, j.pos)
        };
        if !matches!(tok, Tok::Plus | Tok::Minus) {
            return self.parse_atom();
        }
        self.avance();

        self.entrer(pos)?;
        let v = self.parse_unary();
        self.sortir();

        if tok == Tok::Minus {
            v.map(|x| -x)
        } else {
            v
        }
    }

    fn parse_atom(&mut self) -> Result<BigRational, Erreur> {
        let j = self.peek().clone();

        match j.tok {
            Tok::Num => {
                self.avance();
                nombre(&j.texte, j.pos)
            }
            Tok::LPar => {
                self.avance();

                self.entrer(j.pos)?;
                let v = self.parse_expression();
                self.sortir();
                let v = v?;

                self.attendre(Tok::RPar, "')'")
                    .map_err(|cause| Erreur::ParentheseNonFermee {
                        ouverture: j.pos,
                        cause: Box::new(cause),
                    })?;
                Ok(v)
            }
            _ => Err(inattendu(&j, ATTENDU_ATOME)),
        }
    }
}

/* ------------------------ Helpers ------------------------ */

fn inattendu(j: &Jeton, attendu: &'static str) -> Erreur {
    if j.tok == Tok::Fin {
        Erreur::FinInattendue { pos: j.pos, attendu }
    } else {
        Erreur::JetonInattendu {
            jeton: j.to_string(),
            pos: j.pos,
            attendu,
        }
    }
}

fn operande(operateur: &'static str, pos: usize, cause: Erreur) -> Erreur {
    Erreur::Operande {
        operateur,
        pos,
        cause: Box::new(cause),
    }
}

/// Texte décimal -> rationnel exact : "12.50" = 1250/100 = 25/2, ".01" = 1/100.
fn nombre(texte: &str, pos: usize) -> Result<BigRational, Erreur> {
    let invalide = || Erreur::NombreInvalide {
        texte: texte.to_string(),
        pos,
    };

    let (entier, frac) = texte.split_once('.').unwrap_or((texte, ""));
    let chiffres = format!("{entier}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or_else(invalide)?;
    let echelle = u32::try_from(frac.len()).map_err(|_| invalide())?;

    Ok(BigRational::new(n, BigInt::from(10u8).pow(echelle)))
}

/// Reste tronqué (signe de l’opérande gauche), entiers seulement.
fn modulo(lhs: &BigRational, rhs: &BigRational, pos: usize) -> Result<BigRational, Erreur> {
    if !lhs.is_integer() || !rhs.is_integer() {
        return Err(Erreur::ModuloNonEntier { pos });
    }
    if rhs.is_zero() {
        return Err(Erreur::ModuloParZero { pos });
    }
    Ok(BigRational::from_integer(lhs.numer() % rhs.numer()))
}
