//! Tests scientifiques (campagne) : propriétés de bout en bout, par le moteur.
//!
//! Tout passe par `Moteur::appuyer` avec les libellés des boutons,
//! exactement comme l’UI : saisie, "=", Inv, Rad/Deg, AC.
//!
//! Notes (aligné avec la grammaire du noyau) :
//! - pas de multiplication implicite ("2π" => Error)
//! - base de ^ et opérande de ! : suite de chiffres seulement
//! - contrôle de domaine : premier argument “plat” de la première occurrence

use super::moteur::Moteur;
use super::UniteAngle;

fn moteur(libelles: &[&str]) -> Moteur {
    let mut m = Moteur::new();
    for l in libelles {
        m.appuyer(l);
    }
    m
}

fn valeur(m: &Moteur) -> f64 {
    m.texte_affiche()
        .parse::<f64>()
        .unwrap_or_else(|e| panic!("affichage non numérique {:?}: {e}", m.texte_affiche()))
}

fn assert_proche(m: &Moteur, attendu: f64) {
    let v = valeur(m);
    assert!(
        (v - attendu).abs() < 1e-9,
        "attendu ≈ {attendu}, obtenu {v} (affichage {:?})",
        m.texte_affiche()
    );
}

fn historique(m: &Moteur) -> Vec<String> {
    m.historique()
        .entrees_recentes()
        .map(|e| e.to_string())
        .collect()
}

/* ------------------------ Arithmétique ------------------------ */

#[test]
fn sci_operateur_binaire_unique_exact() {
    for (a, op, b, attendu) in [
        ("2", "+", "3", "5"),
        ("9", "−", "12", "-3"),
        ("6", "×", "7", "42"),
        ("8", "÷", "4", "2"),
        ("1", "÷", "4", "0.25"),
    ] {
        let m = moteur(&[a, op, b, "="]);
        assert_eq!(m.texte_affiche(), attendu, "{a}{op}{b}");
    }
}

#[test]
fn sci_factorielles() {
    assert_eq!(moteur(&["0", "x!", "="]).texte_affiche(), "1");
    assert_eq!(moteur(&["1", "x!", "="]).texte_affiche(), "1");
    assert_eq!(moteur(&["5", "x!", "="]).texte_affiche(), "120");
}

#[test]
fn sci_suffixes_et_racine() {
    assert_eq!(moteur(&["1", "2", "x²", "="]).texte_affiche(), "144");
    assert_eq!(moteur(&["2", "5", "%", "="]).texte_affiche(), "0.25");
    assert_eq!(moteur(&["√", "8", "1", ")", "="]).texte_affiche(), "9");
    assert_eq!(moteur(&["2", "^", "8", "="]).texte_affiche(), "256");
}

#[test]
fn sci_exp_et_constantes() {
    // 2 EXP 3 : littéral scientifique
    assert_eq!(moteur(&["2", "EXP", "3", "="]).texte_affiche(), "2000");
    // EXP seul : constante d’Euler
    assert_proche(&moteur(&["EXP", "="]), std::f64::consts::E);
    assert_proche(&moteur(&["2", "×", "π", "="]), 2.0 * std::f64::consts::PI);
}

#[test]
fn sci_puissance_sans_parenthese_a_fermer() {
    // ^ est un opérateur binaire : rien à refermer
    assert_eq!(moteur(&["2", "^", "3", "="]).texte_affiche(), "8");
    assert_eq!(moteur(&["2", "^", "3", "+", "1", "="]).texte_affiche(), "9");
    assert_eq!(moteur(&["2", "^", "(", "3", "="]).texte_affiche(), "Error");
}

#[test]
fn sci_e_au_carre() {
    let m = moteur(&["e", "x²", "="]);
    assert_proche(&m, std::f64::consts::E * std::f64::consts::E);
    assert_eq!(historique(&m).len(), 1);
    assert_proche(&moteur(&["π", "x²", "="]), std::f64::consts::PI.powi(2));
}

/* ------------------------ Trig + modes ------------------------ */

#[test]
fn sci_sin_90_degres() {
    let m = moteur(&["sin", "9", "0", ")", "="]);
    assert_proche(&m, 1.0);
}

#[test]
fn sci_sin_pi_sur_2_radians() {
    let m = moteur(&["Rad", "sin", "π", "÷", "2", ")", "="]);
    assert_proche(&m, 1.0);
    assert_eq!(m.mode().unite(), UniteAngle::Radian);
}

#[test]
fn sci_arcsin_1_vaut_90() {
    let m = moteur(&["Inv", "arcsin", "1", ")", "="]);
    assert_proche(&m, 90.0);
    assert_eq!(m.historique().len(), 1);
}

#[test]
fn sci_inverse_consomme_apres_calcul_unite_intacte() {
    let mut m = moteur(&["Rad", "Inv", "arctan", "1", ")", "="]);
    assert_proche(&m, 45.0);
    assert!(!m.mode().est_inverse());
    assert_eq!(m.mode().unite(), UniteAngle::Radian);

    // sans Inv au départ : reste sans Inv
    m.appuyer("+");
    m.appuyer("1");
    m.appuyer("=");
    assert!(!m.mode().est_inverse());
    assert_proche(&m, 46.0);
}

#[test]
fn sci_libelles_actifs_suivent_inv() {
    use super::FonctionCanonique;

    let mut m = Moteur::new();
    assert_eq!(m.mode().libelle_actif(FonctionCanonique::Log), "log");
    m.appuyer("Inv");
    assert_eq!(m.mode().libelle_actif(FonctionCanonique::Log), "10^x");
    assert_eq!(m.mode().libelle_actif(FonctionCanonique::Ln), "e^x");
    m.appuyer("Inv");
    assert_eq!(m.mode().libelle_actif(FonctionCanonique::Sin), "sin");
}

/* ------------------------ Domaine ------------------------ */

#[test]
fn sci_log_hors_domaine() {
    for arg in [&["0"][..], &["−", "5"][..]] {
        let mut libelles = vec!["log"];
        libelles.extend_from_slice(arg);
        libelles.extend_from_slice(&[")", "="]);

        let m = moteur(&libelles);
        assert_eq!(m.texte_affiche(), "log/ln input must be > 0");
        assert!(m.historique().is_empty());
    }
}

#[test]
fn sci_arcsin_hors_domaine_garde_inv() {
    let m = moteur(&["Inv", "arcsin", "2", ")", "="]);
    assert_eq!(m.texte_affiche(), "arcsin/arccos input must be [-1, 1]");
    assert!(m.historique().is_empty());
    // pas de reset de mode sur erreur de domaine
    assert!(m.mode().est_inverse());
}

#[test]
fn sci_message_efface_a_la_touche_suivante() {
    let mut m = moteur(&["ln", "0", ")", "="]);
    assert!(m.texte_affiche().starts_with("log/ln"));
    m.appuyer("4");
    assert_eq!(m.texte_affiche(), "4");
}

/* ------------------------ AC + historique ------------------------ */

#[test]
fn sci_ac_remet_tout_a_defaut() {
    let mut m = moteur(&["Rad", "Inv", "1", "2"]);
    m.appuyer("AC");
    assert_eq!(m.expression(), "");
    assert_eq!(m.texte_affiche(), "0");
    assert!(!m.mode().est_inverse());
    assert_eq!(m.mode().unite(), UniteAngle::Degre);
}

#[test]
fn sci_historique_plus_recent_d_abord() {
    let mut m = moteur(&["1", "+", "1", "="]);
    m.appuyer("AC");
    for l in ["2", "+", "2", "="] {
        m.appuyer(l);
    }
    assert_eq!(historique(&m), ["2+2 = 4", "1+1 = 2"]);
}

#[test]
fn sci_ans_reprend_l_affichage() {
    // Ans recopie tout l’affichage courant
    let mut m = moteur(&["3", "×", "3", "="]);
    m.appuyer("Ans");
    assert_eq!(m.expression(), "99");
    m.appuyer("÷");
    m.appuyer("9");
    m.appuyer("=");
    assert_eq!(m.texte_affiche(), "11");
    assert_eq!(historique(&m), ["99÷9 = 11", "3×3 = 9"]);

    // sur tampon vide : "0"
    let m = moteur(&["Ans"]);
    assert_eq!(m.expression(), "0");
}

#[test]
fn sci_fonction_non_fermee_malformee() {
    let m = moteur(&["1", "+", "cos", "6", "0", "="]);
    assert_eq!(m.texte_affiche(), "Error");
    assert!(m.historique().is_empty());
}

#[test]
fn sci_malformes_divers() {
    for libelles in [
        &["2", "π", "="][..],
        &["1", "÷", "0", "="][..],
        &["(", "1", "+", "2", ")", "x!", "="][..],
        &["Inv", "Inv", "Inv", "sin", "3", "0", ")", "="][..],
    ] {
        let m = moteur(libelles);
        assert_eq!(m.texte_affiche(), "Error", "{libelles:?}");
        assert!(m.historique().is_empty());
    }
}
