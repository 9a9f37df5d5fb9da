//! Noyau de la calculatrice scientifique
//!
//! Organisation interne :
//! - mode.rs       : unité d’angle + Inv, vocabulaire des touches de fonction
//! - tampon.rs     : expression en cours de saisie (règles d’ajout)
//! - erreur.rs     : erreurs de domaine / malformé
//! - jetons.rs     : normalisation des glyphes + tokenisation
//! - domaine.rs    : pré-contrôles log/ln et arcsin/arccos
//! - analyse.rs    : descente récursive -> Expr
//! - expr.rs       : AST de la notation calculatrice
//! - canon.rs      : réécriture selon le mode -> forme canonique
//! - lecture.rs    : évaluation fermée (f64) + factorielles
//! - format.rs     : texte des résultats + forme canonique lisible
//! - eval.rs       : pipeline complet
//! - historique.rs : historique volatil
//! - moteur.rs     : propriétaire unique de l’état + événements UI

pub mod analyse;
pub mod canon;
pub mod domaine;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod lecture;
pub mod mode;
pub mod moteur;
pub mod tampon;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use mode::{FonctionCanonique, UniteAngle};
pub use moteur::Moteur;
