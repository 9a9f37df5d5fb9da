// src/noyau/analyse.rs
//
// Descente récursive : Vec<Tok> -> Expr
//
// Grammaire (du plus lâche au plus serré) :
//   expression := terme (('+' | '-') terme)*
//   terme      := facteur (('*' | '/') facteur)*
//   facteur    := ('-' | '+') facteur | puissance
//   puissance  := postfixe ('^' facteur)?        base = suite de chiffres seulement
//   postfixe   := primaire ('%' | '!' | '²')*      '!' sur suite de chiffres seulement
//   primaire   := nombre | π | e | '(' expression ')'
//               | fonction '(' expression ')' | '√' '(' expression ')'
//
// Pas de multiplication implicite : "2π" est malformé.
// Toute récursion passe par `facteur` : c’est là qu’on borne la profondeur.

use super::erreur::ErreurEval;
use super::expr::Expr;
use super::jetons::Tok;

/// Garde-fou : profondeur max (parenthèses, moins unaires, exposants imbriqués).
const PROFONDEUR_MAX: usize = 256;

pub fn analyser(jetons: &[Tok]) -> Result<Expr, ErreurEval> {
    if jetons.is_empty() {
        return Err(ErreurEval::malforme("entrée vide"));
    }

    let mut a = Analyseur {
        jetons,
        pos: 0,
        profondeur: 0,
    };
    let e = a.expression()?;

    match a.courant() {
        None => Ok(e),
        Some(Tok::RPar) => Err(ErreurEval::malforme("')' sans '(' correspondante")),
        Some(t) => Err(ErreurEval::malforme(format!("jeton inattendu: {t}"))),
    }
}

struct Analyseur<'a> {
    jetons: &'a [Tok],
    pos: usize,
    profondeur: usize,
}

impl<'a> Analyseur<'a> {
    fn courant(&self) -> Option<&'a Tok> {
        self.jetons.get(self.pos)
    }

    fn avancer(&mut self) -> Option<&'a Tok> {
        let t = self.jetons.get(self.pos);
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    fn attendre(&mut self, attendu: Tok, msg: &str) -> Result<(), ErreurEval> {
        match self.avancer() {
            Some(t) if *t == attendu => Ok(()),
            _ => Err(ErreurEval::malforme(msg)),
        }
    }

    fn expression(&mut self) -> Result<Expr, ErreurEval> {
        let mut g = self.terme()?;
        loop {
            match self.courant() {
                Some(Tok::Plus) => {
                    self.avancer();
                    let d = self.terme()?;
                    g = Expr::Add(Box::new(g), Box::new(d));
                }
                Some(Tok::Minus) => {
                    self.avancer();
                    let d = self.terme()?;
                    g = Expr::Sub(Box::new(g), Box::new(d));
                }
                _ => return Ok(g),
            }
        }
    }

    fn terme(&mut self) -> Result<Expr, ErreurEval> {
        let mut g = self.facteur()?;
        loop {
            match self.courant() {
                Some(Tok::Star) => {
                    self.avancer();
                    let d = self.facteur()?;
                    g = Expr::Mul(Box::new(g), Box::new(d));
                }
                Some(Tok::Slash) => {
                    self.avancer();
                    let d = self.facteur()?;
                    g = Expr::Div(Box::new(g), Box::new(d));
                }
                _ => return Ok(g),
            }
        }
    }

    fn facteur(&mut self) -> Result<Expr, ErreurEval> {
        self.profondeur += 1;
        if self.profondeur > PROFONDEUR_MAX {
            return Err(ErreurEval::malforme("expression trop imbriquée"));
        }

        let e = match self.courant() {
            Some(Tok::Minus) => {
                self.avancer();
                Expr::Neg(Box::new(self.facteur()?))
            }
            Some(Tok::Plus) => {
                self.avancer();
                self.facteur()?
            }
            _ => self.puissance()?,
        };

        self.profondeur -= 1;
        Ok(e)
    }

    fn puissance(&mut self) -> Result<Expr, ErreurEval> {
        let base = self.postfixe()?;
        if !matches!(self.courant(), Some(Tok::Caret)) {
            return Ok(base);
        }
        self.avancer();

        let n = base
            .comme_entier()
            .ok_or_else(|| ErreurEval::malforme("base de '^' : suite de chiffres attendue"))?;
        let exposant = self.facteur()?;
        Ok(Expr::Puissance(n, Box::new(exposant)))
    }

    fn postfixe(&mut self) -> Result<Expr, ErreurEval> {
        let mut e = self.primaire()?;
        loop {
            match self.courant() {
                Some(Tok::Pourcent) => e = Expr::Pourcent(Box::new(e)),
                Some(Tok::Carre) => e = Expr::Carre(Box::new(e)),
                Some(Tok::Factorielle) => {
                    let n = e.comme_entier().ok_or_else(|| {
                        ErreurEval::malforme("'!' : suite de chiffres attendue avant")
                    })?;
                    e = Expr::Factorielle(n);
                }
                _ => return Ok(e),
            }
            self.avancer();
        }
    }

    fn primaire(&mut self) -> Result<Expr, ErreurEval> {
        let tok = self
            .avancer()
            .ok_or_else(|| ErreurEval::malforme("expression incomplète"))?;

        match tok {
            Tok::Nombre { valeur, entier } => Ok(Expr::Nombre {
                valeur: *valeur,
                entier: *entier,
            }),
            Tok::Pi => Ok(Expr::Pi),
            Tok::E => Ok(Expr::E),

            Tok::LPar => self.groupe(),

            Tok::Fonction(f) => {
                self.attendre(Tok::LPar, "fonction sans '('")?;
                let x = self.groupe()?;
                Ok(Expr::Fonction(*f, Box::new(x)))
            }
            Tok::Racine => {
                self.attendre(Tok::LPar, "√ sans '('")?;
                let x = self.groupe()?;
                Ok(Expr::Racine(Box::new(x)))
            }

            t => Err(ErreurEval::malforme(format!("jeton inattendu: {t}"))),
        }
    }

    /// Après '(' : expression puis ')'.
    fn groupe(&mut self) -> Result<Expr, ErreurEval> {
        let x = self.expression()?;
        self.attendre(Tok::RPar, "parenthèses non fermées")?;
        Ok(x)
    }
}
