// src/noyau/moteur.rs
//
// Moteur de la calculatrice : seul propriétaire du tampon, du mode et de l’historique.
// L’UI ne voit que des événements (touche, =, Inv, Rad/Deg, AC) et du texte à afficher.
//
// Contrats :
// - chaque événement commence par effacer un reste d’erreur dans le tampon
// - "=" réussi : entrée d’historique, tampon = résultat, Inv consommé (unité intacte)
// - "=" en erreur de domaine : tampon = message ; malformé : tampon = "Error"
//   (ni historique ni changement de mode dans les deux cas)
// - AC : tampon vide, Deg, Inv off

use tracing::{debug, warn};

use super::eval::evaluer;
use super::format::format_nombre;
use super::historique::{EntreeHistorique, Historique};
use super::mode::{ModeCalc, UniteAngle};
use super::tampon::{Tampon, Touche};

/// Ce que l’UI reçoit après "=".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub affichage: String,
    pub historique_ajoute: bool,
}

#[derive(Clone, Debug, Default)]
pub struct Moteur {
    tampon: Tampon,
    mode: ModeCalc,
    historique: Historique,
}

impl Moteur {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn texte_affiche(&self) -> &str {
        self.tampon.texte_affiche()
    }

    #[cfg(test)]
    pub fn expression(&self) -> &str {
        self.tampon.texte()
    }

    pub fn mode(&self) -> &ModeCalc {
        &self.mode
    }

    pub fn historique(&self) -> &Historique {
        &self.historique
    }

    /* ------------------------ Événements ------------------------ */

    pub fn sur_touche(&mut self, touche: &Touche) {
        self.tampon.ajouter(touche);
    }

    pub fn basculer_inverse(&mut self) {
        self.tampon.purger_message();
        self.mode.basculer_inverse();
    }

    pub fn choisir_unite(&mut self, unite: UniteAngle) {
        self.tampon.purger_message();
        self.mode.choisir_unite(unite);
    }

    /// AC
    pub fn tout_effacer(&mut self) {
        self.tampon.vider();
        self.mode.reset();
        debug!("remise à zéro");
    }

    /// "="
    pub fn evaluer(&mut self) -> Evaluation {
        self.tampon.purger_message();

        if self.tampon.est_vide() {
            return Evaluation {
                affichage: self.texte_affiche().to_string(),
                historique_ajoute: false,
            };
        }

        let soumis = self.tampon.texte().to_string();

        match evaluer(&soumis, &self.mode) {
            Ok(valeur) => {
                let resultat = format_nombre(valeur);
                let entree = EntreeHistorique::new(soumis, resultat.clone());
                debug!(entree = %entree, "historique");

                self.historique.ajouter(entree);
                self.tampon.remplacer(resultat);
                self.mode.consommer_inverse();

                Evaluation {
                    affichage: self.texte_affiche().to_string(),
                    historique_ajoute: true,
                }
            }
            Err(e) => {
                warn!(expression = %soumis, erreur = %e, "évaluation échouée");
                self.tampon.remplacer(e.texte_affiche());

                Evaluation {
                    affichage: self.texte_affiche().to_string(),
                    historique_ajoute: false,
                }
            }
        }
    }

    /// Aiguillage par libellé de bouton (AC, =, Inv, Rad, Deg, puis touches de saisie).
    pub fn appuyer(&mut self, libelle: &str) {
        match libelle {
            "AC" => self.tout_effacer(),
            "=" => {
                self.evaluer();
            }
            "Inv" => self.basculer_inverse(),
            _ => match UniteAngle::depuis_libelle(libelle) {
                Some(u) => self.choisir_unite(u),
                None => self.sur_touche(&Touche::depuis_libelle(libelle)),
            },
        }
    }
}
