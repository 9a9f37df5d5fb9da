// src/noyau/format.rs
//
// - format_nombre : texte d’un résultat (écran + historique)
//     entier            -> sans partie décimale ("5")
//     |x| >= 1e21       -> exposant signé ("1e+21")
//     0 < |x| < 1e-6    -> exposant ("1.2e-7")
//     sinon             -> décimal le plus court qui relit la même valeur
//     -0                -> "0"
// - Display pour Canon : forme canonique lisible (journal)

use std::fmt;

use super::canon::{Canon, Constante, Operateur, Primitive};

pub fn format_nombre(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let a = v.abs();
    if a >= 1e21 || a < 1e-6 {
        format_exposant(v)
    } else {
        format!("{v}")
    }
}

fn format_exposant(v: f64) -> String {
    // {:e} donne la mantisse la plus courte : "1e21", "1.2246467991473532e-16"
    let s = format!("{v:e}");
    match s.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => s,
    }
}

impl Primitive {
    pub fn nom(self) -> &'static str {
        match self {
            Primitive::Sin => "sin",
            Primitive::Cos => "cos",
            Primitive::Tan => "tan",
            Primitive::Asin => "asin",
            Primitive::Acos => "acos",
            Primitive::Atan => "atan",
            Primitive::Log10 => "log10",
            Primitive::Ln => "ln",
            Primitive::Exp => "exp",
            Primitive::Racine => "sqrt",
            Primitive::DegVersRad => "deg_vers_rad",
            Primitive::RadVersDeg => "rad_vers_deg",
        }
    }
}

impl fmt::Display for Canon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Canon::Nombre(v) => f.write_str(&format_nombre(*v)),
            Canon::Constante(Constante::Pi) => f.write_str("PI"),
            Canon::Constante(Constante::E) => f.write_str("E"),
            Canon::Neg(x) => write!(f, "(-{x})"),
            Canon::Binaire(op, a, b) => {
                let o = match op {
                    Operateur::Plus => "+",
                    Operateur::Moins => "-",
                    Operateur::Fois => "*",
                    Operateur::Divise => "/",
                };
                write!(f, "({a} {o} {b})")
            }
            Canon::Appel(p, x) => write!(f, "{}({x})", p.nom()),
            Canon::Puissance(a, b) => write!(f, "pow({a}, {b})"),
        }
    }
}
