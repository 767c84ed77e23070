//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> Expr -> marche récursive -> Nombre
//!
//! Fonction pure : même chaîne en entrée, même résultat en sortie,
//! aucun état caché. Toute faute (syntaxe, construction non autorisée,
//! arithmétique) remonte en ErreurEval via `?` ; l’UI collapse ensuite.

use super::erreur::ErreurEval;
use super::expr::{Expr, Nombre, OpBinaire, OpUnaire};
use super::jetons::tokenize;
use super::rpn::{from_rpn, to_rpn};

/// API publique : évalue une expression arithmétique restreinte
/// (littéraux numériques, signes unaires, + - * / % **, parenthèses).
pub fn evaluer(expr_str: &str) -> Result<Nombre, ErreurEval> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurEval::Syntaxe("entrée vide".into()));
    }

    // 1) Jetons
    let jetons = tokenize(s)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;

    // 3) AST (Expr)
    let expr = from_rpn(&rpn)?;

    // 4) Marche récursive
    eval_expr(&expr)
}

/// Marche récursive sur la somme fermée Expr.
/// Opérande gauche évaluée d’abord (ordre gauche-droite).
fn eval_expr(e: &Expr) -> Result<Nombre, ErreurEval> {
    match e {
        Expr::Nombre(n) => Ok(*n),

        Expr::Unaire(op, x) => {
            let v = eval_expr(x)?;
            match op {
                OpUnaire::Plus => Ok(v),
                OpUnaire::Moins => v.neg(),
            }
        }

        Expr::Binaire(op, a, b) => {
            let va = eval_expr(a)?;
            let vb = eval_expr(b)?;
            match op {
                OpBinaire::Add => va.add(vb),
                OpBinaire::Sub => va.sub(vb),
                OpBinaire::Mul => va.mul(vb),
                OpBinaire::Div => va.div(vb),
                OpBinaire::Mod => va.modulo(vb),
                OpBinaire::Pow => va.puissance(vb),
            }
        }
    }
}
