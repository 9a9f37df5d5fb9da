// src/noyau/domaine.rs
//
// Pré-contrôles de domaine (avant toute évaluation)
// -------------------------------------------------
// - On inspecte le texte normalisé, pas l’arbre : seul le PREMIER argument
//   “plat” de chaque fonction est lu, entre `nom(` et la première `)`.
// - Une seule occurrence par nom (la première qui a une `)` et un argument non vide).
// - L’argument est lu comme un préfixe numérique (signe, chiffres, décimales, exposant).
//   Non lisible => hors domaine (ex: log(π) est refusé).
//
// Normal : log(a), ln(a)        exigent a > 0
// Inv    : arcsin(a), arccos(a) exigent -1 <= a <= 1

use std::sync::OnceLock;

use regex::Regex;

use super::erreur::ErreurDomaine;
use super::mode::{Fonction, ModeCalc};

struct Motifs {
    log: Regex,
    ln: Regex,
    arcsin: Regex,
    arccos: Regex,
    prefixe_nombre: Regex,
}

fn motifs() -> &'static Motifs {
    static MOTIFS: OnceLock<Motifs> = OnceLock::new();

    MOTIFS.get_or_init(|| Motifs {
        log: motif_argument(Fonction::Log),
        ln: motif_argument(Fonction::Ln),
        arcsin: motif_argument(Fonction::Arcsin),
        arccos: motif_argument(Fonction::Arccos),
        prefixe_nombre: Regex::new(
            r"^[+-]?(?:Infinity|[0-9]+(?:\.[0-9]*)?(?:[eE][+-]?[0-9]+)?|\.[0-9]+(?:[eE][+-]?[0-9]+)?)",
        )
        .expect("motif statique"),
    })
}

/// `nom\(([^)]+)\)`
fn motif_argument(f: Fonction) -> Regex {
    Regex::new(&format!(r"{}\(([^)]+)\)", regex::escape(f.nom()))).expect("motif statique")
}

fn premier_argument<'t>(motif: &Regex, texte: &'t str) -> Option<&'t str> {
    motif
        .captures(texte)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Lit le plus long préfixe numérique de `s` (espaces de tête ignorés).
/// "2+3" -> 2 ; "-0.5)" -> -0.5 ; "π" -> None
pub fn parse_float_prefixe(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let m = motifs().prefixe_nombre.find(s)?;
    m.as_str().parse::<f64>().ok()
}

pub fn verifier_domaine(texte: &str, mode: &ModeCalc) -> Result<(), ErreurDomaine> {
    let m = motifs();

    if !mode.est_inverse() {
        for motif in [&m.log, &m.ln] {
            if let Some(arg) = premier_argument(motif, texte) {
                let ok = parse_float_prefixe(arg).is_some_and(|a| a.is_finite() && a > 0.0);
                if !ok {
                    return Err(ErreurDomaine::LogLn);
                }
            }
        }
    } else {
        for motif in [&m.arcsin, &m.arccos] {
            if let Some(arg) = premier_argument(motif, texte) {
                let ok = parse_float_prefixe(arg)
                    .is_some_and(|a| a.is_finite() && (-1.0..=1.0).contains(&a));
                if !ok {
                    return Err(ErreurDomaine::ArcsinArccos);
                }
            }
        }
    }

    Ok(())
}
