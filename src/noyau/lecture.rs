// src/noyau/lecture.rs
//
// Lecture numérique (f64) de la forme canonique : évaluation “fermée”.
// - aucun nom, aucune variable : seulement les variantes de Canon
// - pas d’état : la valeur dépend uniquement de l’arbre reçu
// - factorielles précalculées (table 0..=170, au-delà : +∞)

use std::f64::consts::{E, PI};
use std::sync::OnceLock;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

use super::canon::{Canon, Constante, Operateur, Primitive};

/// 171! dépasse f64::MAX.
const FACTORIELLE_MAX: usize = 170;

pub fn deg_vers_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

pub fn rad_vers_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

impl Primitive {
    pub fn appliquer(self, x: f64) -> f64 {
        match self {
            Primitive::Sin => x.sin(),
            Primitive::Cos => x.cos(),
            Primitive::Tan => x.tan(),
            Primitive::Asin => x.asin(),
            Primitive::Acos => x.acos(),
            Primitive::Atan => x.atan(),
            Primitive::Log10 => x.log10(),
            Primitive::Ln => x.ln(),
            Primitive::Exp => x.exp(),
            Primitive::Racine => x.sqrt(),
            Primitive::DegVersRad => deg_vers_rad(x),
            Primitive::RadVersDeg => rad_vers_deg(x),
        }
    }
}

impl Constante {
    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => PI,
            Constante::E => E,
        }
    }
}

/// Évalue la forme canonique. Le résultat peut être non fini (±∞, NaN) :
/// c’est l’appelant qui décide quoi en faire.
pub fn evaluer_canon(c: &Canon) -> f64 {
    match c {
        Canon::Nombre(v) => *v,
        Canon::Constante(k) => k.valeur(),
        Canon::Neg(x) => -evaluer_canon(x),
        Canon::Binaire(op, a, b) => {
            let a = evaluer_canon(a);
            let b = evaluer_canon(b);
            match op {
                Operateur::Plus => a + b,
                Operateur::Moins => a - b,
                Operateur::Fois => a * b,
                Operateur::Divise => a / b,
            }
        }
        Canon::Appel(p, x) => p.appliquer(evaluer_canon(x)),
        Canon::Puissance(base, exposant) => evaluer_canon(base).powf(evaluer_canon(exposant)),
    }
}

/* ------------------------ Factorielles (table) ------------------------ */

fn table_factorielles() -> &'static [f64] {
    static TABLE: OnceLock<Vec<f64>> = OnceLock::new();

    TABLE.get_or_init(|| {
        let mut acc = BigUint::one();
        let mut t = Vec::with_capacity(FACTORIELLE_MAX + 1);
        t.push(1.0);
        for k in 1..=FACTORIELLE_MAX as u32 {
            acc *= k;
            // entier exact -> f64 arrondi au plus proche
            t.push(acc.to_f64().unwrap_or(f64::INFINITY));
        }
        t
    })
}

/// n! ; 0! = 1! = 1 ; négatif ou non entier : NaN ; trop grand : +∞.
pub fn factorielle(n: f64) -> f64 {
    if n.is_nan() || n < 0.0 || n.fract() != 0.0 {
        return f64::NAN;
    }
    if n > FACTORIELLE_MAX as f64 {
        return f64::INFINITY;
    }
    table_factorielles()[n as usize]
}
