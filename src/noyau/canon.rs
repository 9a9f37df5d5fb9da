// src/noyau/canon.rs
//
// Forme canonique (réécriture dépendante du mode)
// -----------------------------------------------
// Expr (notation calculatrice) -> Canon (jeu fermé de primitives) :
// - Inv    : arcsin/arccos/arctan -> rad_vers_deg(asin/acos/atan(x))
//            10^x -> pow(10, x) ; e^x -> exp(x)
// - normal : Deg -> sin(deg_vers_rad(x)) ; Rad -> sin(x) ; idem cos/tan
//            log -> log10 ; ln -> ln
// - chiffres^x -> pow(chiffres, x)
// - chiffres!  -> valeur précalculée (table)
// - x% -> x/100 ; x² -> pow(x, 2) ; √(x) -> sqrt(x) ; π, e -> constantes
//
// Une fonction hors du vocabulaire actif (ex: sin en Inv) n’a pas de réécriture : malformé.

use super::erreur::ErreurEval;
use super::expr::Expr;
use super::lecture::factorielle;
use super::mode::{Fonction, ModeCalc, UniteAngle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

/// Les seules fonctions atteignables par l’évaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Log10,
    Ln,
    Exp,
    Racine,
    DegVersRad,
    RadVersDeg,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Canon {
    Nombre(f64),
    Constante(Constante),
    Neg(Box<Canon>),
    Binaire(Operateur, Box<Canon>, Box<Canon>),
    Appel(Primitive, Box<Canon>),
    Puissance(Box<Canon>, Box<Canon>),
}

impl Canon {
    fn appel(p: Primitive, x: Canon) -> Canon {
        Canon::Appel(p, Box::new(x))
    }

    fn binaire(op: Operateur, a: Canon, b: Canon) -> Canon {
        Canon::Binaire(op, Box::new(a), Box::new(b))
    }

    fn puissance(base: Canon, exposant: Canon) -> Canon {
        Canon::Puissance(Box::new(base), Box::new(exposant))
    }
}

pub fn canoniser(e: Expr, mode: &ModeCalc) -> Result<Canon, ErreurEval> {
    use Expr::*;

    let c = match e {
        Nombre { valeur, .. } => Canon::Nombre(valeur),
        Pi => Canon::Constante(Constante::Pi),
        E => Canon::Constante(Constante::E),

        Neg(x) => Canon::Neg(Box::new(canoniser(*x, mode)?)),

        Add(a, b) => Canon::binaire(Operateur::Plus, canoniser(*a, mode)?, canoniser(*b, mode)?),
        Sub(a, b) => Canon::binaire(Operateur::Moins, canoniser(*a, mode)?, canoniser(*b, mode)?),
        Mul(a, b) => Canon::binaire(Operateur::Fois, canoniser(*a, mode)?, canoniser(*b, mode)?),
        Div(a, b) => Canon::binaire(Operateur::Divise, canoniser(*a, mode)?, canoniser(*b, mode)?),

        Puissance(base, x) => Canon::puissance(Canon::Nombre(base), canoniser(*x, mode)?),
        Factorielle(n) => Canon::Nombre(factorielle(n)),

        Pourcent(x) => Canon::binaire(
            Operateur::Divise,
            canoniser(*x, mode)?,
            Canon::Nombre(100.0),
        ),
        Carre(x) => Canon::puissance(canoniser(*x, mode)?, Canon::Nombre(2.0)),
        Racine(x) => Canon::appel(Primitive::Racine, canoniser(*x, mode)?),

        Expr::Fonction(f, x) => {
            if !mode.accepte(f) {
                return Err(ErreurEval::malforme(format!(
                    "{}( sans réécriture dans ce mode",
                    f.nom()
                )));
            }
            reecrire_fonction(f, canoniser(*x, mode)?, mode.unite())
        }
    };

    Ok(c)
}

fn reecrire_fonction(f: Fonction, x: Canon, unite: UniteAngle) -> Canon {
    let angle = |x: Canon| match unite {
        UniteAngle::Degre => Canon::appel(Primitive::DegVersRad, x),
        UniteAngle::Radian => x,
    };
    let en_degres = |p: Primitive, x: Canon| {
        Canon::appel(Primitive::RadVersDeg, Canon::appel(p, x))
    };

    match f {
        Fonction::Sin => Canon::appel(Primitive::Sin, angle(x)),
        Fonction::Cos => Canon::appel(Primitive::Cos, angle(x)),
        Fonction::Tan => Canon::appel(Primitive::Tan, angle(x)),
        Fonction::Log => Canon::appel(Primitive::Log10, x),
        Fonction::Ln => Canon::appel(Primitive::Ln, x),

        // inverses : résultat toujours en degrés
        Fonction::Arcsin => en_degres(Primitive::Asin, x),
        Fonction::Arccos => en_degres(Primitive::Acos, x),
        Fonction::Arctan => en_degres(Primitive::Atan, x),
        Fonction::DixPuissance => Canon::puissance(Canon::Nombre(10.0), x),
        Fonction::ExpNaturelle => Canon::appel(Primitive::Exp, x),
    }
}
