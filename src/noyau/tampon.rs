// src/noyau/tampon.rs
//
// Tampon d’expression (texte en cours de saisie)
// ----------------------------------------------
// Règles d’ajout par classe de touche :
// - littéral (chiffre, '.', opérateur, π, e, parenthèse) : ajouté tel quel
// - fonction / √ : "nom(" ; la ')' n’est jamais écrite par le tampon
// - %, !, ² : suffixes collés à la fin, sans regroupement
// - EXP : ajoute "e"
// - Ans : ajoute le texte affiché ("0" si vide)
//
// Garde : un reste d’erreur ("Error" ou message de domaine) est effacé avant tout ajout.

use super::erreur::est_message_perime;
use super::mode::Fonction;

/// Une touche “de saisie” (les commandes AC, =, Inv, Rad/Deg sont ailleurs).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Touche {
    Litteral(String),
    Fonction(Fonction),
    Racine,
    Pourcent,
    Factorielle,
    Carre,
    Exp,
    Reponse,
}

impl Touche {
    pub fn litteral(texte: impl Into<String>) -> Self {
        Touche::Litteral(texte.into())
    }

    /// Libellé de bouton -> touche. Tout libellé inconnu est un littéral.
    pub fn depuis_libelle(libelle: &str) -> Touche {
        match libelle {
            "%" => Touche::Pourcent,
            "x!" => Touche::Factorielle,
            "√" => Touche::Racine,
            "x²" => Touche::Carre,
            "EXP" => Touche::Exp,
            "Ans" => Touche::Reponse,
            _ => match Fonction::depuis_nom(libelle) {
                Some(f) => Touche::Fonction(f),
                None => Touche::litteral(libelle),
            },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tampon {
    texte: String,
}

impl Tampon {
    pub fn texte(&self) -> &str {
        &self.texte
    }

    pub fn est_vide(&self) -> bool {
        self.texte.is_empty()
    }

    /// Rendu : "0" quand vide.
    pub fn texte_affiche(&self) -> &str {
        if self.texte.is_empty() {
            "0"
        } else {
            &self.texte
        }
    }

    /// Efface un reste d’erreur. Retourne vrai si quelque chose a été effacé.
    pub fn purger_message(&mut self) -> bool {
        if est_message_perime(&self.texte) {
            self.texte.clear();
            true
        } else {
            false
        }
    }

    pub fn ajouter(&mut self, touche: &Touche) {
        self.purger_message();

        match touche {
            Touche::Litteral(s) => self.texte.push_str(s),
            Touche::Fonction(f) => {
                self.texte.push_str(f.nom());
                self.texte.push('(');
            }
            Touche::Racine => self.texte.push_str("√("),
            Touche::Pourcent => self.texte.push('%'),
            Touche::Factorielle => self.texte.push('!'),
            Touche::Carre => self.texte.push('²'),
            Touche::Exp => self.texte.push('e'),
            Touche::Reponse => {
                let affiche = self.texte_affiche().to_string();
                self.texte.push_str(&affiche);
            }
        }
    }

    pub fn vider(&mut self) {
        self.texte.clear();
    }

    /// Remplacement complet (résultat ou message d’erreur).
    pub fn remplacer(&mut self, texte: impl Into<String>) {
        self.texte = texte.into();
    }
}
