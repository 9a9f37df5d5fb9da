// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// - Écran : texte du moteur ("0" si vide)
// - Pavé 7 colonnes, libellés des fonctions selon Inv (sin↔arcsin, log↔10^x, …)
// - Rad/Deg et Inv affichés “sélectionnés” selon le mode
// - Panneau d’historique (plus récent d’abord), masqué par défaut
//
// Chaque clic est transmis tel quel (libellé) au moteur : aucune logique de calcul ici.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::mode::ModeCalc;
use crate::noyau::{FonctionCanonique, UniteAngle};

/// Taille des touches du pavé.
const TAILLE_TOUCHE: [f32; 2] = [54.0, 34.0];

/// Une case du pavé.
#[derive(Clone, Copy, Debug)]
enum Case {
    Texte(&'static str),
    Fonction(FonctionCanonique),
    Unite(UniteAngle),
    Inv,
}

use self::Case::{Fonction as F, Texte as T};

const PAVE: [[Case; 7]; 5] = [
    [
        Case::Unite(UniteAngle::Radian),
        Case::Unite(UniteAngle::Degre),
        T("x!"),
        T("("),
        T(")"),
        T("%"),
        T("AC"),
    ],
    [
        Case::Inv,
        F(FonctionCanonique::Sin),
        F(FonctionCanonique::Ln),
        T("7"),
        T("8"),
        T("9"),
        T("÷"),
    ],
    [
        T("π"),
        F(FonctionCanonique::Cos),
        F(FonctionCanonique::Log),
        T("4"),
        T("5"),
        T("6"),
        T("×"),
    ],
    [
        T("e"),
        F(FonctionCanonique::Tan),
        T("√"),
        T("1"),
        T("2"),
        T("3"),
        T("−"),
    ],
    [
        T("Ans"),
        T("EXP"),
        T("x²"),
        T("0"),
        T("."),
        T("="),
        T("+"),
    ],
];

impl Case {
    /// (libellé, sélectionnée ?)
    fn rendu(self, mode: &ModeCalc) -> (&'static str, bool) {
        match self {
            Case::Texte(t) => (t, false),
            Case::Fonction(f) => (mode.libelle_actif(f), false),
            Case::Unite(u) => (u.libelle(), mode.unite() == u),
            Case::Inv => ("Inv", mode.est_inverse()),
        }
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Calculatrice scientifique");
                    let h = ui
                        .add(egui::Button::new("🕘").selected(self.historique_visible))
                        .on_hover_text("Historique");
                    if h.clicked() {
                        self.basculer_historique();
                    }
                });
                ui.add_space(6.0);

                if self.historique_visible {
                    self.ui_historique(ui);
                    ui.add_space(6.0);
                }

                self.ui_ecran(ui);

                ui.add_space(8.0);

                self.ui_pave(ui);
            });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.moteur.texte_affiche())
                            .monospace()
                            .size(28.0),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let mode = *self.moteur.mode();
        let mut clic: Option<&'static str> = None;

        egui::Grid::new("pave_scientifique")
            .num_columns(7)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for case in ligne {
                        let (libelle, selectionnee) = case.rendu(&mode);
                        let resp = ui.add_sized(
                            TAILLE_TOUCHE,
                            egui::Button::new(libelle).selected(selectionnee),
                        );
                        if resp.clicked() {
                            clic = Some(libelle);
                        }
                    }
                    ui.end_row();
                }
            });

        if let Some(libelle) = clic {
            self.appuyer(libelle);
        }
    }

    fn ui_historique(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            let historique = self.moteur.historique();
            ui.label(format!("Historique ({}) :", historique.len()));

            if historique.is_empty() {
                ui.weak("(vide)");
                return;
            }

            egui::ScrollArea::vertical()
                .id_salt("historique_scroll")
                .max_height(160.0)
                .show(ui, |ui| {
                    for entree in historique.entrees_recentes() {
                        ui.horizontal(|ui| {
                            ui.monospace(entree.expression());
                            ui.weak("=");
                            ui.strong(entree.resultat());
                        });
                    }
                });
        });
    }
}
