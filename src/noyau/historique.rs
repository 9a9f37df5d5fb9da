// src/noyau/historique.rs
//
// Historique des calculs (volatil, en mémoire).
// - ajout seulement, ordre d’insertion = ordre chronologique
// - lecture “plus récent d’abord” sans copie ni mutation

use std::fmt;
use std::iter::Rev;
use std::slice::Iter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique {
    expression: String,
    resultat: String,
}

impl EntreeHistorique {
    pub fn new(expression: impl Into<String>, resultat: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            resultat: resultat.into(),
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn resultat(&self) -> &str {
        &self.resultat
    }
}

impl fmt::Display for EntreeHistorique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.resultat)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: Vec<EntreeHistorique>,
}

impl Historique {
    pub fn ajouter(&mut self, entree: EntreeHistorique) {
        self.entrees.push(entree);
    }

    /// Plus récent d’abord. Rappeler (ou cloner l’itérateur) pour recommencer.
    pub fn entrees_recentes(&self) -> Rev<Iter<'_, EntreeHistorique>> {
        self.entrees.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }
}
