// src/noyau/jetons.rs

use super::erreur::ErreurEval;
use super::expr::Nombre;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(Nombre),

    // Identifiants [a-zA-Z_][a-zA-Z0-9_]* : lexés ici, REFUSÉS au parse (rpn.rs).
    // Les garder comme jeton permet de distinguer “construction non autorisée”
    // (x, sqrt, …) de “syntaxe invalide” (caractère inconnu).
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    DoubleStar, // **

    // Signes unaires : produits UNIQUEMENT par to_rpn (jamais par tokenize).
    PlusU,
    MoinsU,

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - entiers (ex: 12) et réels (ex: 3.5, .5, 2.)
/// - opérateurs + - * / % **
/// - parenthèses ( )
/// - espaces (ignorés partout entre jetons)
/// - identifiants (lexés puis refusés plus loin — liste blanche)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs ('*' regarde le caractère suivant pour '**')
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                if i + 1 < chars.len() && chars[i + 1] == '*' {
                    out.push(Tok::DoubleStar);
                    i += 2;
                } else {
                    out.push(Tok::Star);
                    i += 1;
                }
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            '%' => {
                out.push(Tok::Percent);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(Tok::Ident(word));
            continue;
        }

        // Littéral numérique : chiffres + au plus un point.
        // - sans point : entier i64 (repli réel si trop grand pour i64)
        // - un point   : réel
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut points = 0usize;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                if chars[i] == '.' {
                    points += 1;
                }
                i += 1;
            }
            let lit: String = chars[start..i].iter().collect();

            let n = match points {
                0 => match lit.parse::<i64>() {
                    Ok(v) => Nombre::Entier(v),
                    // littéral entier hors i64 : magnitude préservée en f64
                    Err(_) => Nombre::Reel(
                        lit.parse::<f64>()
                            .map_err(|_| ErreurEval::Syntaxe(format!("nombre invalide: {lit}")))?,
                    ),
                },
                1 => Nombre::Reel(
                    lit.parse::<f64>()
                        .map_err(|_| ErreurEval::Syntaxe(format!("nombre invalide: {lit}")))?,
                ),
                _ => return Err(ErreurEval::Syntaxe(format!("nombre invalide: {lit}"))),
            };

            out.push(Tok::Num(n));
            continue;
        }

        return Err(ErreurEval::Syntaxe(format!("caractère inattendu: '{c}'")));
    }

    Ok(out)
}
