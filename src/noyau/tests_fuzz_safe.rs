//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée, exposants littéraux petits
//! - budget temps global
//! - on accepte certaines erreurs attendues (division par zéro, modulo non entier, etc.)
//! - invariant clé : forme canonique relue => même valeur

use std::time::{Duration, Instant};

use num_traits::{Signed, Zero};

use super::erreur::Erreur;
use super::format::format_rat;
use super::{evaluer_expression, evaluer_expression_avec, rationnel_depuis_paire, Limites};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(e: &Erreur) -> bool {
    // Liste blanche : erreurs *normales* sur des expressions bien formées.
    matches!(
        e.noyau(),
        Erreur::DivisionParZero { .. }
            | Erreur::ModuloParZero { .. }
            | Erreur::ModuloNonEntier { .. }
            | Erreur::ZeroPuissanceNegative
            | Erreur::DenominateurNul
    )
}

fn check_relecture(expr: &str, limites: &Limites) {
    if let Ok(v) = evaluer_expression_avec(expr, limites) {
        assert!(v.denom().is_positive(), "dénominateur <= 0 pour {expr:?}");
        let canon = format_rat(&v);
        let relu = evaluer_expression(&canon)
            .unwrap_or_else(|e| panic!("forme canonique illisible: {canon:?} err={e}"));
        assert_eq!(v, relu, "expr={expr:?} canon={canon:?}");
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let a = rng.pick(10);
    match rng.pick(4) {
        0 => format!("{a}.{}", rng.pick(100)),
        1 => format!(".{}", rng.pick(10)),
        _ => format!("{a}"),
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(4) {
        0 => format!("-{}", gen_nombre(rng)),
        _ => gen_nombre(rng),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(8) {
        0 => gen_atom(rng),
        1 => format!("({} + {})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({} - {})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({} * {})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({} / {})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("({} % {})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        6 => {
            // exposant littéral petit : pas de garde-fou déclenché
            let k = rng.pick(7) as i32 - 3;
            format!("({}) ** {k}", gen_expr(rng, depth - 1))
        }
        _ => {
            if rng.coin() {
                format!("-({})", gen_expr(rng, depth - 1))
            } else {
                format!("+{}", gen_expr(rng, depth - 1))
            }
        }
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_relecture() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut rng_bis = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        // Même seed => mêmes expressions => mêmes sorties (déterminisme)
        let expr_bis = gen_expr(&mut rng_bis, 4);
        assert_eq!(expr, expr_bis);
        assert_eq!(evaluer_expression(&expr), evaluer_expression(&expr_bis));

        match evaluer_expression(&expr) {
            Ok(_) => {
                check_relecture(&expr, &Limites::default());
                seen_ok += 1;
            }
            Err(e) => {
                assert!(
                    is_erreur_attendue(&e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_paires() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..80 {
        budget(t0, max);

        let num = gen_expr(&mut rng, 3);
        let den = gen_expr(&mut rng, 2);

        match rationnel_depuis_paire(&num, &den) {
            Ok(q) => {
                // q * den == num quand les deux côtés s’évaluent
                let n = evaluer_expression(&num).unwrap();
                let d = evaluer_expression(&den).unwrap();
                if den.trim() == "1" {
                    assert_eq!(q, n);
                } else {
                    assert!(!d.is_zero());
                    assert_eq!(q * d, n, "num={num:?} den={den:?}");
                }
            }
            Err(e) => assert!(
                is_erreur_attendue(&e),
                "erreur non attendue: num={num:?} den={den:?} err={e}"
            ),
        }
    }
}

#[test]
fn fuzz_safe_soupe_de_caracteres() {
    // Texte arbitraire : jamais de panique ; un succès est toujours canonique.
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    const ALPHABET: &[char] = &[
        '0', '1', '2', '7', '9', '.', '+', '-', '*', '/', '%', '(', ')', ' ', 'x',
    ];
    let mut rng = Rng::new(0x5EED_u64);
    let mut seen_ok = 0usize;

    // "9**999999" est une entrée valide : exposants bornés pour tenir le budget
    let lim = Limites::default().exposant_max(64);

    for _ in 0..400 {
        budget(t0, max);

        let len = 1 + rng.pick(12) as usize;
        let s: String = (0..len)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
            .collect();

        if evaluer_expression_avec(&s, &lim).is_ok() {
            seen_ok += 1;
        }
        check_relecture(&s, &lim);
    }

    assert!(seen_ok > 0, "aucun succès : soupe trop “sale”");
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let expr = somme_balancee("1/2", 800);
    budget(t0, max);

    let v = evaluer_expression(&expr).unwrap_or_else(|e| panic!("err: {e}"));

    // 800*(1/2) = 400
    assert_eq!(format_rat(&v), "400");
    budget(t0, max);
}
