//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - sur une expression générée valide, seules les fautes ARITHMÉTIQUES
//!   sont acceptables (division par zéro, dépassement, hors domaine) ;
//!   une erreur de syntaxe ou de liste blanche serait un bug du parseur
//! - invariant clé : évaluer deux fois la même chaîne donne le même résultat

use std::time::{Duration, Instant};

use super::{evaluer, format_nombre, ErreurEval};

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

fn est_faute_arithmetique(e: &ErreurEval) -> bool {
    matches!(
        e,
        ErreurEval::DivisionParZero | ErreurEval::Depassement | ErreurEval::HorsDomaine
    )
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    if rng.coin() {
        // entier 0..=9 (0 inclus : utile pour tester les zéros)
        format!("{}", rng.pick(10))
    } else {
        // réel d.d
        format!("{}.{}", rng.pick(10), rng.pick(10))
    }
}

fn gen_expr(rng: &mut Rng, profondeur: u32) -> String {
    if profondeur == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(8) {
        0 => gen_nombre(rng),
        1 => format!("-{}", gen_expr(rng, profondeur - 1)),
        2 => format!("({})", gen_expr(rng, profondeur - 1)),
        3..=6 => {
            let op = ["+", "-", "*", "/", "%"][rng.pick(5) as usize];
            format!(
                "{}{op}{}",
                gen_expr(rng, profondeur - 1),
                gen_expr(rng, profondeur - 1)
            )
        }
        _ => {
            // exposant borné à un littéral : évite les tours de puissances
            format!("{}**{}", gen_expr(rng, profondeur - 1), gen_nombre(rng))
        }
    }
}

/// Même expression, avec des espaces autour des opérateurs simples et des
/// parenthèses ("**" et les littéraux restent intacts).
fn avec_espaces(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    let chars: Vec<char> = s.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '*' && i + 1 < chars.len() && chars[i + 1] == '*' {
            out.push_str(" ** ");
            i += 2;
            continue;
        }
        if matches!(c, '+' | '-' | '/' | '%' | '*' | '(' | ')') {
            out.push(' ');
            out.push(c);
            out.push(' ');
        } else {
            out.push(c);
        }
        i += 1;
    }
    out
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_jamais_de_panique_et_erreurs_attendues() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xCA1C_0001);

    for _ in 0..2000 {
        budget(t0, max);
        let expr = gen_expr(&mut rng, 4);

        match evaluer(&expr) {
            Ok(n) => {
                // le formatage ne doit jamais paniquer non plus
                let _ = format_nombre(n);
            }
            Err(e) => {
                assert!(
                    est_faute_arithmetique(&e),
                    "expr générée {expr:?} : erreur non arithmétique {e}"
                );
            }
        }
    }
}

#[test]
fn fuzz_idempotence() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xCA1C_0002);

    for _ in 0..1000 {
        budget(t0, max);
        let expr = gen_expr(&mut rng, 4);

        // comparaison en Debug : stable même si un NaN se glissait dans un Ok
        let a = format!("{:?}", evaluer(&expr));
        let b = format!("{:?}", evaluer(&expr));
        assert_eq!(a, b, "expr={expr:?}");
    }
}

#[test]
fn fuzz_espaces_sans_effet() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xCA1C_0003);

    for _ in 0..1000 {
        budget(t0, max);
        let expr = gen_expr(&mut rng, 3);
        let espacee = avec_espaces(&expr);

        let a = format!("{:?}", evaluer(&expr));
        let b = format!("{:?}", evaluer(&espacee));
        assert_eq!(a, b, "expr={expr:?} espacée={espacee:?}");
    }
}

#[test]
fn fuzz_profondeur_controlee() {
    // expression profonde mais bornée : ne doit ni paniquer ni geler
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut expr = "1".to_string();
    for _ in 0..200 {
        expr = format!("({expr}+1)");
        budget(t0, max);
    }

    let v = evaluer(&expr).unwrap_or_else(|e| panic!("somme parenthésée: {e}"));
    assert_eq!(format_nombre(v), "201");
}
