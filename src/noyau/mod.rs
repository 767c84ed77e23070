//! Noyau arithmétique
//!
//! Organisation interne :
//! - erreur.rs : ErreurEval (causes distinctes, collapsées en "Error" par l'UI)
//! - expr.rs   : AST (somme fermée) + arithmétique Nombre (entier/réel)
//! - jetons.rs : tokenisation
//! - rpn.rs    : shunting-yard + construction Expr
//! - format.rs : affichage du résultat
//! - eval.rs   : pipeline complet

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::evaluer;
pub use expr::Nombre;
pub use format::format_nombre;
