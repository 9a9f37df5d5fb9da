//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le moteur avec des suites de boutons sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur de saisie bornée
//! - budget temps global
//! - invariants clés :
//!   * jamais de panique
//!   * l’historique ne grandit que si "=" réussit, d’une entrée exactement
//!   * après "=" : résultat fini, "Error" ou message de domaine
//!   * l’affichage n’est jamais vide

use std::time::{Duration, Instant};

use super::erreur::{est_message_perime, MARQUEUR_ERREUR};
use super::moteur::Moteur;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Boutons ------------------------ */

const BOUTONS: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "−", "×", "÷", "(", ")", "π", "e",
    "%", "x!", "x²", "√", "^", "EXP", "Ans", "sin", "cos", "tan", "arcsin", "arccos", "arctan",
    "log", "ln", "10^x", "e^x", "Inv", "Rad", "Deg", "=", "AC",
];

/// Boutons “sages” : produisent surtout des expressions valides.
const CHIFFRES: &[&str] = &["1", "2", "3", "4", "5", "6", "7", "8", "9"];
const OPERATEURS: &[&str] = &["+", "−", "×"];

fn choisir<'a>(rng: &mut Rng, liste: &[&'a str]) -> &'a str {
    liste[rng.pick(liste.len() as u32) as usize]
}

/// Contrôle d’un "=" : effet sur l’historique et texte affiché cohérents.
fn appuyer_egal_et_verifier(m: &mut Moteur) -> bool {
    let avant = m.historique().len();
    let ev = m.evaluer();
    let apres = m.historique().len();

    assert!(!m.texte_affiche().is_empty());

    if ev.historique_ajoute {
        assert_eq!(apres, avant + 1);
        let v: f64 = ev
            .affichage
            .parse()
            .unwrap_or_else(|e| panic!("résultat non numérique {:?}: {e}", ev.affichage));
        assert!(v.is_finite());
        assert!(!m.mode().est_inverse(), "Inv doit être consommé");
    } else {
        assert_eq!(apres, avant);
        assert!(
            ev.affichage == "0"
                || ev.affichage == MARQUEUR_ERREUR
                || est_message_perime(&ev.affichage),
            "affichage inattendu: {:?}",
            ev.affichage
        );
    }

    ev.historique_ajoute
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_boutons_aleatoires() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let mut m = Moteur::new();
        let n = 1 + rng.pick(12);
        for _ in 0..n {
            let b = choisir(&mut rng, BOUTONS);
            if b == "=" {
                continue;
            }
            m.appuyer(b);
            assert!(!m.texte_affiche().is_empty());
        }

        if appuyer_egal_et_verifier(&mut m) {
            seen_ok += 1;
        } else {
            seen_err += 1;
        }
    }

    // boutons au hasard : surtout des erreurs, mais on veut voir les deux
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
    assert!(seen_ok > 0, "aucun succès vu");
}

#[test]
fn fuzz_safe_expressions_sages_toujours_evaluees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..150 {
        budget(t0, max);

        // a op b op c ... : toujours valide, toujours fini
        let mut m = Moteur::new();
        m.appuyer(choisir(&mut rng, CHIFFRES));
        for _ in 0..rng.pick(6) {
            m.appuyer(choisir(&mut rng, OPERATEURS));
            m.appuyer(choisir(&mut rng, CHIFFRES));
        }
        let soumis = m.expression().to_string();

        assert!(
            appuyer_egal_et_verifier(&mut m),
            "expression valide refusée: {soumis:?} -> {:?}",
            m.texte_affiche()
        );
    }
}

#[test]
fn fuzz_safe_session_longue_historique_monotone() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0x5EED_u64);
    let mut m = Moteur::new();
    let mut reussis = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let b = choisir(&mut rng, BOUTONS);
        if b == "=" {
            if appuyer_egal_et_verifier(&mut m) {
                reussis += 1;
            }
        } else {
            m.appuyer(b);
        }
    }

    assert_eq!(m.historique().len(), reussis);
}

#[test]
fn fuzz_safe_imbrication_profonde_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut m = Moteur::new();
    for _ in 0..5000 {
        m.appuyer("(");
    }
    m.appuyer("1");
    for _ in 0..5000 {
        m.appuyer(")");
    }
    budget(t0, max);

    let ev = m.evaluer();
    assert_eq!(ev.affichage, "Error");
    assert!(m.historique().is_empty());
}
