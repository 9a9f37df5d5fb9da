//! Noyau : évaluation (pipeline réel)
//!
//! normaliser symboles -> contrôles de domaine -> jetons -> arbre
//!        -> forme canonique (mode) -> lecture f64 -> résultat fini
//!
//! Les contrôles de domaine travaillent sur le texte (premier argument plat),
//! avant toute analyse : une expression hors domaine n’est jamais évaluée.

use tracing::{debug, trace};

use super::analyse::analyser;
use super::canon::canoniser;
use super::domaine::verifier_domaine;
use super::erreur::ErreurEval;
use super::jetons::{format_tokens, normaliser_symboles, tokenize};
use super::lecture::evaluer_canon;
use super::mode::ModeCalc;

/// API publique : évalue une expression sous un mode donné.
/// Ne touche à aucun état : c’est le moteur qui applique les effets (tampon, historique, Inv).
pub fn evaluer(expression: &str, mode: &ModeCalc) -> Result<f64, ErreurEval> {
    let s = expression.trim();
    if s.is_empty() {
        return Err(ErreurEval::malforme("entrée vide"));
    }

    // 1) Symboles
    let texte = normaliser_symboles(s);

    // 2) Domaine (texte plat)
    verifier_domaine(&texte, mode)?;

    // 3) Jetons
    let jetons = tokenize(&texte)?;
    trace!(jetons = %format_tokens(&jetons), "jetons");

    // 4) Arbre
    let arbre = analyser(&jetons)?;

    // 5) Forme canonique (fonctions, puissances, factorielles)
    let canon = canoniser(arbre, mode)?;
    debug!(%canon, "évaluation");

    // 6) Lecture fermée
    let valeur = evaluer_canon(&canon);
    if !valeur.is_finite() {
        return Err(ErreurEval::malforme(format!("résultat non fini: {valeur}")));
    }

    Ok(valeur)
}
