// src/noyau/jetons.rs

use std::fmt;

use super::erreur::ErreurEval;
use super::mode::Fonction;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    /// `entier` : suite de chiffres pure (ni '.', ni exposant).
    Nombre {
        valeur: f64,
        entier: bool,
    },
    Pi,
    E,

    // "nom" seulement ; la '(' qui suit reste un LPar
    Fonction(Fonction),
    Racine, // √

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^

    // suffixes
    Pourcent,
    Factorielle,
    Carre, // ²

    LPar,
    RPar,
}

/// Étape 1 : glyphes de la calculatrice -> opérateurs ASCII.
/// π, e, √, ², %, ! restent des symboles (le découpage les reconnaît).
pub fn normaliser_symboles(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            '−' => '-',
            _ => c,
        })
        .collect()
}

/// Tokenize une expression normalisée.
/// Supporte:
/// - nombres décimaux (12, 1.5, .5, 5.) + exposant collé (2e3, 2e-3)
/// - opérateurs + - * / ^ et suffixes % ! ²
/// - parenthèses ( )
/// - π et e isolé (constante d’Euler)
/// - fonctions sin cos tan arcsin arccos arctan log ln 10^x e^x (suivies de '(')
/// - √
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Fonctions d’abord : "10^x(" et "e^x(" commencent comme un nombre / e
        if let Some(f) = fonction_en_tete(&chars[i..]) {
            out.push(Tok::Fonction(f));
            i += f.nom().chars().count();
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            '^' => Some(Tok::Caret),
            '%' => Some(Tok::Pourcent),
            '!' => Some(Tok::Factorielle),
            '²' => Some(Tok::Carre),
            'π' => Some(Tok::Pi),
            '√' => Some(Tok::Racine),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let (tok, lu) = lire_nombre(&chars[i..])?;
            out.push(tok);
            i += lu;
            continue;
        }

        // e isolé : ni lettre/chiffre juste avant, ni juste après
        if c == 'e' {
            let avant_mot = i > 0 && est_car_mot(chars[i - 1]);
            let apres_mot = chars.get(i + 1).is_some_and(|n| est_car_mot(*n));
            if !avant_mot && !apres_mot {
                out.push(Tok::E);
                i += 1;
                continue;
            }
        }

        if c.is_alphabetic() {
            let start = i;
            i += 1;
            while i < chars.len() && est_car_mot(chars[i]) {
                i += 1;
            }
            let mot: String = chars[start..i].iter().collect();
            return Err(ErreurEval::malforme(format!("identifiant inconnu: {mot:?}")));
        }

        return Err(ErreurEval::malforme(format!("caractère inattendu: '{c}'")));
    }

    Ok(out)
}

/// Caractère de mot ASCII : '²' et 'π' n’en sont pas.
fn est_car_mot(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// "nom(" en tête ? (on ne consomme pas la parenthèse)
fn fonction_en_tete(chars: &[char]) -> Option<Fonction> {
    Fonction::TOUTES.into_iter().find(|f| {
        let mut n = 0;
        for attendu in f.nom().chars() {
            if chars.get(n) != Some(&attendu) {
                return false;
            }
            n += 1;
        }
        chars.get(n) == Some(&'(')
    })
}

/// Littéral numérique : chiffres [. chiffres] [e [+-] chiffres].
/// Retourne le jeton et le nombre de caractères lus.
fn lire_nombre(chars: &[char]) -> Result<(Tok, usize), ErreurEval> {
    let chiffres = |from: usize| {
        let mut j = from;
        while j < chars.len() && chars[j].is_ascii_digit() {
            j += 1;
        }
        j
    };

    let mut j = chiffres(0);
    let mut entier = true;
    let mut nb_chiffres = j;

    if chars.get(j) == Some(&'.') {
        entier = false;
        let fin = chiffres(j + 1);
        nb_chiffres += fin - (j + 1);
        j = fin;
    }

    if nb_chiffres == 0 {
        return Err(ErreurEval::malforme("'.' sans chiffre"));
    }

    // exposant collé seulement s’il est suivi de chiffres (sinon e est autre chose)
    if chars.get(j) == Some(&'e') {
        let k = match chars.get(j + 1) {
            Some('+') | Some('-') => j + 2,
            _ => j + 1,
        };
        if chars.get(k).is_some_and(|c| c.is_ascii_digit()) {
            entier = false;
            j = chiffres(k);
        }
    }

    let txt: String = chars[..j].iter().collect();
    let valeur = txt
        .parse::<f64>()
        .map_err(|_| ErreurEval::malforme(format!("nombre invalide: {txt:?}")))?;

    Ok((Tok::Nombre { valeur, entier }, j))
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Nombre { valeur, .. } => write!(f, "{valeur}"),
            Tok::Pi => f.write_str("π"),
            Tok::E => f.write_str("e"),
            Tok::Fonction(fun) => f.write_str(fun.nom()),
            Tok::Racine => f.write_str("√"),

            Tok::Plus => f.write_str("+"),
            Tok::Minus => f.write_str("-"),
            Tok::Star => f.write_str("*"),
            Tok::Slash => f.write_str("/"),
            Tok::Caret => f.write_str("^"),

            Tok::Pourcent => f.write_str("%"),
            Tok::Factorielle => f.write_str("!"),
            Tok::Carre => f.write_str("²"),

            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
