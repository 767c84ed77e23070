// src/noyau/expr.rs
//
// AST arithmétique (somme fermée) + type numérique mixte.
// - Nombre : Entier(i64) ou Reel(f64) — la forme lexicale du littéral décide
// - Unaire : signe préfixe (+x, -x)
// - Binaire : + - * / % **
//
// Liste blanche, pas liste noire : l’enum est FERMÉ. Tout ce qui n’est pas
// littéral / unaire / binaire n’existe pas dans cet arbre (les identifiants
// sont refusés en amont, voir rpn.rs).

use num_traits::Zero;

use super::erreur::ErreurEval;

/// Valeur numérique : entier ou réel.
///
/// Règles de promotion (sémantique du module) :
/// - + - * entre entiers restent entiers (arithmétique vérifiée, dépassement = erreur)
/// - dès qu’un réel apparaît, tout passe en f64
/// - la division vraie `/` produit TOUJOURS un réel, même entre entiers
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nombre {
    Entier(i64),
    Reel(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpUnaire {
    Plus,
    Moins,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBinaire {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(Nombre),
    Unaire(OpUnaire, Box<Expr>),
    Binaire(OpBinaire, Box<Expr>, Box<Expr>),
}

impl Nombre {
    pub fn en_f64(self) -> f64 {
        match self {
            Nombre::Entier(n) => n as f64,
            Nombre::Reel(x) => x,
        }
    }

    pub fn est_nul(self) -> bool {
        match self {
            Nombre::Entier(n) => n == 0,
            Nombre::Reel(x) => x.is_zero(),
        }
    }

    /// Négation (moins unaire). `-i64::MIN` ne tient pas dans i64.
    pub fn neg(self) -> Result<Nombre, ErreurEval> {
        match self {
            Nombre::Entier(n) => n
                .checked_neg()
                .map(Nombre::Entier)
                .ok_or(ErreurEval::Depassement),
            Nombre::Reel(x) => Ok(Nombre::Reel(-x)),
        }
    }

    pub fn add(self, autre: Nombre) -> Result<Nombre, ErreurEval> {
        match (self, autre) {
            (Nombre::Entier(a), Nombre::Entier(b)) => a
                .checked_add(b)
                .map(Nombre::Entier)
                .ok_or(ErreurEval::Depassement),
            _ => Ok(Nombre::Reel(self.en_f64() + autre.en_f64())),
        }
    }

    pub fn sub(self, autre: Nombre) -> Result<Nombre, ErreurEval> {
        match (self, autre) {
            (Nombre::Entier(a), Nombre::Entier(b)) => a
                .checked_sub(b)
                .map(Nombre::Entier)
                .ok_or(ErreurEval::Depassement),
            _ => Ok(Nombre::Reel(self.en_f64() - autre.en_f64())),
        }
    }

    pub fn mul(self, autre: Nombre) -> Result<Nombre, ErreurEval> {
        match (self, autre) {
            (Nombre::Entier(a), Nombre::Entier(b)) => a
                .checked_mul(b)
                .map(Nombre::Entier)
                .ok_or(ErreurEval::Depassement),
            _ => Ok(Nombre::Reel(self.en_f64() * autre.en_f64())),
        }
    }

    /// Division vraie : toujours flottante, même entre entiers (8/2 → 4.0).
    pub fn div(self, autre: Nombre) -> Result<Nombre, ErreurEval> {
        if autre.est_nul() {
            return Err(ErreurEval::DivisionParZero);
        }
        Ok(Nombre::Reel(self.en_f64() / autre.en_f64()))
    }

    /// Modulo : le reste prend le signe du DIVISEUR (-7 % 3 = 2, 7 % -3 = -2).
    pub fn modulo(self, autre: Nombre) -> Result<Nombre, ErreurEval> {
        if autre.est_nul() {
            return Err(ErreurEval::DivisionParZero);
        }
        match (self, autre) {
            (Nombre::Entier(a), Nombre::Entier(b)) => {
                // checked_rem couvre i64::MIN % -1
                let r = a.checked_rem(b).ok_or(ErreurEval::Depassement)?;
                let r = if r != 0 && (r < 0) != (b < 0) { r + b } else { r };
                Ok(Nombre::Entier(r))
            }
            _ => {
                let (a, b) = (self.en_f64(), autre.en_f64());
                Ok(Nombre::Reel(a - b * (a / b).floor()))
            }
        }
    }

    /// Puissance `**`.
    /// - entier ** entier ≥ 0 : puissance entière vérifiée
    /// - sinon : f64::powf, avec contrôle de domaine (base négative, exposant
    ///   fractionnaire → NaN) et de dépassement (résultat infini sur opérandes finis)
    pub fn puissance(self, autre: Nombre) -> Result<Nombre, ErreurEval> {
        match (self, autre) {
            (Nombre::Entier(a), Nombre::Entier(b)) if b >= 0 => {
                let e = u32::try_from(b).map_err(|_| ErreurEval::Depassement)?;
                a.checked_pow(e)
                    .map(Nombre::Entier)
                    .ok_or(ErreurEval::Depassement)
            }
            _ => {
                let (a, b) = (self.en_f64(), autre.en_f64());
                if a == 0.0 && b < 0.0 {
                    // 0 ** exposant négatif : même famille que 1/0
                    return Err(ErreurEval::DivisionParZero);
                }
                let r = a.powf(b);
                if r.is_nan() && !a.is_nan() && !b.is_nan() {
                    return Err(ErreurEval::HorsDomaine);
                }
                if r.is_infinite() && a.is_finite() && b.is_finite() {
                    return Err(ErreurEval::Depassement);
                }
                Ok(Nombre::Reel(r))
            }
        }
    }
}
