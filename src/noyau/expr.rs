// src/noyau/expr.rs
//
// AST “brut” de la notation calculatrice (sortie de l’analyse).
// Aucune sémantique de mode ici : sin reste Fonction(Sin, ·) quel que soit Deg/Rad/Inv.
// La réécriture dépendante du mode se fait dans canon.rs.

use super::mode::Fonction;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// `entier` : littéral fait seulement de chiffres (seule base admise pour ^ et !).
    Nombre { valeur: f64, entier: bool },
    Pi,
    E,

    Neg(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),

    /// chiffres ^ exposant
    Puissance(f64, Box<Expr>),
    /// chiffres !
    Factorielle(f64),

    Pourcent(Box<Expr>), // x%
    Carre(Box<Expr>),    // x²
    Racine(Box<Expr>),   // √(x)

    Fonction(Fonction, Box<Expr>),
}

impl Expr {
    /// Littéral “suite de chiffres” ?
    pub fn comme_entier(&self) -> Option<f64> {
        match self {
            Expr::Nombre {
                valeur,
                entier: true,
            } => Some(*valeur),
            _ => None,
        }
    }
}
