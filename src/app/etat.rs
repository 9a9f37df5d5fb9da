//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter le moteur (seul propriétaire de l’expression, du mode et de l’historique)
//! et les quelques drapeaux propres à l’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Moteur`.
//! - Le panneau d’historique est masqué au démarrage.

use crate::noyau::Moteur;

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub moteur: Moteur,

    // --- UX ---
    pub historique_visible: bool,
}

impl AppCalc {
    /// Bouton d’historique : afficher / masquer.
    pub fn basculer_historique(&mut self) {
        self.historique_visible = !self.historique_visible;
    }

    /// Clic ou raccourci clavier : tout passe par le libellé du bouton.
    pub fn appuyer(&mut self, libelle: &str) {
        self.moteur.appuyer(libelle);
    }
}
