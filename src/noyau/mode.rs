// src/noyau/mode.rs
//
// Mode de calcul (unité d’angle + bascule Inv)
// ---------------------------------------------
// - Unité : Deg (défaut) ou Rad
// - Inv   : change le vocabulaire des touches de fonction
//           sin↔arcsin, cos↔arccos, tan↔arctan, log↔10^x, ln↔e^x
// - Inv est “à un coup” : consommé après un calcul réussi (consommer_inverse)
// - AC remet tout à défaut (reset)

use tracing::info;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UniteAngle {
    #[default]
    Degre,
    Radian,
}

impl UniteAngle {
    /// Libellé de la touche correspondante.
    pub fn libelle(self) -> &'static str {
        match self {
            UniteAngle::Degre => "Deg",
            UniteAngle::Radian => "Rad",
        }
    }

    pub fn depuis_libelle(libelle: &str) -> Option<UniteAngle> {
        match libelle {
            "Deg" => Some(UniteAngle::Degre),
            "Rad" => Some(UniteAngle::Radian),
            _ => None,
        }
    }
}

/// Identité “canonique” d’une touche de fonction (indépendante de Inv).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionCanonique {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
}

impl FonctionCanonique {
    #[cfg(test)]
    pub const TOUTES: [FonctionCanonique; 5] = [
        FonctionCanonique::Sin,
        FonctionCanonique::Cos,
        FonctionCanonique::Tan,
        FonctionCanonique::Log,
        FonctionCanonique::Ln,
    ];
}

/// Jeton de fonction tel qu’il est écrit dans l’expression (`nom(`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Arcsin,
    Arccos,
    Arctan,
    Log,
    Ln,
    DixPuissance, // 10^x
    ExpNaturelle, // e^x
}

impl Fonction {
    /// Ordre utile au découpage : les noms longs d’abord.
    pub const TOUTES: [Fonction; 10] = [
        Fonction::Arcsin,
        Fonction::Arccos,
        Fonction::Arctan,
        Fonction::DixPuissance,
        Fonction::ExpNaturelle,
        Fonction::Sin,
        Fonction::Cos,
        Fonction::Tan,
        Fonction::Log,
        Fonction::Ln,
    ];

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Arcsin => "arcsin",
            Fonction::Arccos => "arccos",
            Fonction::Arctan => "arctan",
            Fonction::Log => "log",
            Fonction::Ln => "ln",
            Fonction::DixPuissance => "10^x",
            Fonction::ExpNaturelle => "e^x",
        }
    }

    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        Fonction::TOUTES.into_iter().find(|f| f.nom() == nom)
    }

    /// Vrai pour le vocabulaire “Inv”.
    pub fn est_inverse(self) -> bool {
        matches!(
            self,
            Fonction::Arcsin
                | Fonction::Arccos
                | Fonction::Arctan
                | Fonction::DixPuissance
                | Fonction::ExpNaturelle
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeCalc {
    unite: UniteAngle,
    inverse: bool,
}

impl ModeCalc {
    pub fn unite(&self) -> UniteAngle {
        self.unite
    }

    pub fn est_inverse(&self) -> bool {
        self.inverse
    }

    /// Inv : bascule Off↔On.
    pub fn basculer_inverse(&mut self) {
        self.inverse = !self.inverse;
    }

    /// Rad/Deg : affectation (pas une bascule).
    pub fn choisir_unite(&mut self, unite: UniteAngle) {
        self.unite = unite;
        info!(
            mode = unite.libelle(),
            degres = (unite == UniteAngle::Degre),
            "unité d’angle"
        );
    }

    /// AC : Deg + Inv off.
    pub fn reset(&mut self) {
        self.inverse = false;
        self.choisir_unite(UniteAngle::Degre);
    }

    /// Après un calcul réussi : seul Inv est consommé, l’unité reste.
    pub fn consommer_inverse(&mut self) {
        self.inverse = false;
    }

    /// Jeton actif pour une touche de fonction, selon Inv.
    pub fn fonction_active(&self, f: FonctionCanonique) -> Fonction {
        match (f, self.inverse) {
            (FonctionCanonique::Sin, false) => Fonction::Sin,
            (FonctionCanonique::Cos, false) => Fonction::Cos,
            (FonctionCanonique::Tan, false) => Fonction::Tan,
            (FonctionCanonique::Log, false) => Fonction::Log,
            (FonctionCanonique::Ln, false) => Fonction::Ln,
            (FonctionCanonique::Sin, true) => Fonction::Arcsin,
            (FonctionCanonique::Cos, true) => Fonction::Arccos,
            (FonctionCanonique::Tan, true) => Fonction::Arctan,
            (FonctionCanonique::Log, true) => Fonction::DixPuissance,
            (FonctionCanonique::Ln, true) => Fonction::ExpNaturelle,
        }
    }

    pub fn libelle_actif(&self, f: FonctionCanonique) -> &'static str {
        self.fonction_active(f).nom()
    }

    /// Une fonction n’est réécrite que dans le vocabulaire qui l’a produite.
    pub fn accepte(&self, f: Fonction) -> bool {
        f.est_inverse() == self.inverse
    }
}
