// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - Précédences : ** (4, assoc. droite) > signe unaire (3) > * / % (2) > + - (1)
// - Signe unaire : un '+'/'-' qui arrive quand on n’attend PAS une valeur
//   devient PlusU/MoinsU, un vrai opérateur préfixe.
//   (PAS d’injection de 0 : "0 x -" casserait la liaison face à * et **,
//   ex. 2*-3 doit donner -6 et -2**2 doit donner -4.)
// - Ident(...) : REFUSÉ ici (liste blanche : littéraux et opérateurs seulement).

use super::erreur::ErreurEval;
use super::expr::{Expr, OpBinaire, OpUnaire};
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash | Tok::Percent => 2,
        Tok::PlusU | Tok::MoinsU => 3,
        Tok::DoubleStar => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    // ** est assoc. droite ; les signes unaires sont préfixes (même règle de dépilage)
    matches!(t, Tok::DoubleStar | Tok::PlusU | Tok::MoinsU)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Minus, Num(2), DoubleStar, Num(2)]
///   rpn:    [Num(2), Num(2), DoubleStar, MoinsU]      (= -(2**2) = -4)
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le signe unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            // Liste blanche : aucun identifiant n’atteint l’AST.
            Tok::Ident(name) => {
                return Err(ErreurEval::NonAutorise(format!("identifiant: {name}")));
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu’à '('
                let mut ouverte = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouverte = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouverte {
                    return Err(ErreurEval::Syntaxe(
                        "parenthèse fermante sans ouvrante".into(),
                    ));
                }
                prev_was_value = true;
            }

            // Signe unaire : préfixe, rien à dépiler (l’opérande n’est pas encore lue).
            Tok::Plus | Tok::Minus if !prev_was_value => {
                ops.push(if matches!(tok, Tok::Minus) {
                    Tok::MoinsU
                } else {
                    Tok::PlusU
                });
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent | Tok::DoubleStar => {
                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if doit_pop {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            // Jamais produits par tokenize ; les voir en entrée est une faute interne.
            Tok::PlusU | Tok::MoinsU => {
                return Err(ErreurEval::Syntaxe("jeton unaire inattendu".into()));
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::Syntaxe("parenthèses non fermées".into()));
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN.
///
/// Défense en profondeur : même si to_rpn laissait passer un jeton hors
/// liste blanche, il est refusé ici par une branche EXPLICITE (pas de `_`).
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, ErreurEval> {
    fn depile(st: &mut Vec<Expr>) -> Result<Expr, ErreurEval> {
        st.pop()
            .ok_or_else(|| ErreurEval::Syntaxe("expression invalide".into()))
    }

    let mut st: Vec<Expr> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(n) => st.push(Expr::Nombre(n)),

            Tok::PlusU | Tok::MoinsU => {
                let x = depile(&mut st)?;
                let op = if matches!(tok, Tok::MoinsU) {
                    OpUnaire::Moins
                } else {
                    OpUnaire::Plus
                };
                st.push(Expr::Unaire(op, Box::new(x)));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent | Tok::DoubleStar => {
                let b = depile(&mut st)?;
                let a = depile(&mut st)?;

                let op = match tok {
                    Tok::Plus => OpBinaire::Add,
                    Tok::Minus => OpBinaire::Sub,
                    Tok::Star => OpBinaire::Mul,
                    Tok::Slash => OpBinaire::Div,
                    Tok::Percent => OpBinaire::Mod,
                    Tok::DoubleStar => OpBinaire::Pow,
                    _ => unreachable!(),
                };

                st.push(Expr::Binaire(op, Box::new(a), Box::new(b)));
            }

            Tok::Ident(name) => {
                return Err(ErreurEval::NonAutorise(format!("identifiant: {name}")));
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurEval::Syntaxe("parenthèse inattendue en RPN".into()));
            }
        }
    }

    if st.len() != 1 {
        return Err(ErreurEval::Syntaxe("expression invalide".into()));
    }
    Ok(st.pop().unwrap())
}
