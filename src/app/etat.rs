//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, dernier résultat, erreur)
//! et offrir des opérations simples (saisie/DEL/C) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - En cas d’erreur, l’entrée est CONSERVÉE (l’utilisateur corrige et relance).

/// Jeton d’erreur affiché tel quel (la cause précise n’est pas exposée à l’utilisateur).
pub const JETON_ERREUR: &str = "Error";

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sortie ---
    pub affichage: String, // dernier résultat formaté, ou JETON_ERREUR
    pub erreur: bool,      // true si `affichage` est le jeton d’erreur

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            affichage: String::new(),
            erreur: false,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// C : tout effacer (entrée + résultat).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.affichage.clear();
        self.erreur = false;
        self.focus_entree = true;
    }

    /// DEL : effacer le dernier caractère de l’entrée.
    pub fn retour_arriere(&mut self) {
        self.entree.pop();
        self.focus_entree = true;
    }

    /// Saisie : ajoute le texte d’un bouton (chiffre, point, opérateur, parenthèse).
    pub fn saisir(&mut self, texte: &str) {
        self.entree.push_str(texte);
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat formaté.
    ///
    /// Le résultat REMPLACE l’entrée (calcul enchaîné : "2+3" = → "5", puis "+4" = → "9").
    pub fn deposer_resultat(&mut self, texte: String) {
        self.erreur = false;
        self.affichage.clone_from(&texte);
        self.entree = texte;
        self.focus_entree = true;
    }

    /// Utilitaire : signaler une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE `entree` (l’utilisateur peut corriger sans tout retaper).
    /// - L’affichage porte le jeton d’erreur, quelle que soit la cause.
    pub fn deposer_erreur(&mut self) {
        self.erreur = true;
        self.affichage = JETON_ERREUR.to_string();
        self.focus_entree = true;
    }
}
