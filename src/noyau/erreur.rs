// src/noyau/erreur.rs

use thiserror::Error;

/// Erreur d’évaluation du noyau.
///
/// Les causes restent distinctes dans le contrat (utile pour les tests) ;
/// l’UI les collapse toutes en un seul jeton "Error".
///
/// Trois familles :
/// - syntaxe invalide (ne parse pas)
/// - construction non autorisée (parse lexicalement mais hors liste blanche)
/// - faute arithmétique (division par zéro, dépassement, hors domaine)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("syntaxe invalide: {0}")]
    Syntaxe(String),

    #[error("construction non autorisée: {0}")]
    NonAutorise(String),

    #[error("division par zéro")]
    DivisionParZero,

    #[error("dépassement de capacité")]
    Depassement,

    #[error("opération hors domaine")]
    HorsDomaine,
}
