// src/noyau/erreur.rs
//
// Taxonomie des erreurs d’évaluation.
// - Domaine  : message lisible affiché tel quel (mode intact, pas d’historique)
// - Malforme : tout le reste ; l’affichage montre seulement le marqueur "Error"

use thiserror::Error;

/// Marqueur affiché après une évaluation malformée.
pub const MARQUEUR_ERREUR: &str = "Error";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurDomaine {
    #[error("log/ln input must be > 0")]
    LogLn,
    #[error("arcsin/arccos input must be [-1, 1]")]
    ArcsinArccos,
}

impl ErreurDomaine {
    pub const TOUTES: [ErreurDomaine; 2] = [ErreurDomaine::LogLn, ErreurDomaine::ArcsinArccos];

    pub fn message(self) -> &'static str {
        match self {
            ErreurDomaine::LogLn => "log/ln input must be > 0",
            ErreurDomaine::ArcsinArccos => "arcsin/arccos input must be [-1, 1]",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurEval {
    #[error(transparent)]
    Domaine(#[from] ErreurDomaine),

    /// Le détail sert au journal, jamais à l’affichage.
    #[error("expression malformée : {0}")]
    Malforme(String),
}

impl ErreurEval {
    pub fn malforme(detail: impl Into<String>) -> Self {
        ErreurEval::Malforme(detail.into())
    }

    /// Texte qui remplace l’expression à l’écran.
    pub fn texte_affiche(&self) -> &'static str {
        match self {
            ErreurEval::Domaine(d) => d.message(),
            ErreurEval::Malforme(_) => MARQUEUR_ERREUR,
        }
    }
}

/// Vrai si `texte` est un reste d’erreur (marqueur ou message de domaine).
pub fn est_message_perime(texte: &str) -> bool {
    texte == MARQUEUR_ERREUR
        || ErreurDomaine::TOUTES
            .iter()
            .any(|d| texte.starts_with(d.message()))
}
