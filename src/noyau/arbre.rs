// src/noyau/arbre.rs
//
// Arbre de calcul.
// - Operande  : ce qui porte une valeur (Constante, Expression)
// - Operateur : ce qui combine des opérandes via une fonction (Unaire, Binaire)
//
// Dispatch par somme fermée (enum + match), pas de hiérarchie virtuelle.
// Chaque noeud possède exclusivement ses enfants (Box) : arbre acyclique,
// jamais partagé entre deux parents.
//
// NOTE (construction en deux temps) :
// l’assemblage (analyse.rs) choisit l’opérateur racine AVANT de construire
// ses deux sous-arbres; on garde donc des fentes Option + poser_* au lieu
// d’un constructeur tout-en-un. Un opérande jamais posé est détecté à
// l’évaluation (OperandeManquant), pas ignoré.

use std::fmt;

use super::erreurs::ErreurCalcul;

/// Fonction numérique d’un opérateur unaire.
pub type FonctionUnaire = fn(f64) -> f64;
/// Fonction numérique d’un opérateur binaire.
pub type FonctionBinaire = fn(f64, f64) -> f64;

/* ------------------------ Opérandes ------------------------ */

/// Tout ce qui peut produire une valeur.
#[derive(Clone, Debug)]
pub enum Operande {
    Constante(Constante),
    Expression(Expression),
}

impl Operande {
    /// Valeur de l’opérande.
    /// Ne peut échouer que sur un arbre construit à la main (racine absente,
    /// fente jamais posée) — jamais sur une sortie de l’analyseur.
    pub fn evaluer(&self) -> Result<f64, ErreurCalcul> {
        match self {
            Operande::Constante(c) => Ok(c.evaluer()),
            Operande::Expression(e) => e.evaluer(),
        }
    }
}

/// Constante : valeur connue à l’analyse, immuable ensuite.
/// Un nom vide => rendu sous forme de littéral numérique.
#[derive(Clone, Debug, PartialEq)]
pub struct Constante {
    nom: String,
    valeur: f64,
}

impl Constante {
    pub fn anonyme(valeur: f64) -> Constante {
        Constante {
            nom: String::new(),
            valeur,
        }
    }

    pub fn nommee(valeur: f64, nom: impl Into<String>) -> Constante {
        Constante {
            nom: nom.into(),
            valeur,
        }
    }

    pub fn nom(&self) -> &str {
        &self.nom
    }

    /// Toujours disponible (aucune condition d’échec).
    pub fn evaluer(&self) -> f64 {
        self.valeur
    }
}

/// Expression : un opérande qui doit d’abord calculer son opérateur racine.
/// Sert surtout à traiter uniformément le sous-arbre d’un opérateur
/// (unaire appliqué à son argument, racine d’un assemblage binaire).
#[derive(Clone, Debug, Default)]
pub struct Expression {
    racine: Option<Box<Operateur>>,
}

impl Expression {
    pub fn vide() -> Expression {
        Expression { racine: None }
    }

    pub fn depuis_racine(op: Operateur) -> Expression {
        Expression {
            racine: Some(Box::new(op)),
        }
    }

    pub fn poser_racine(&mut self, op: Operateur) {
        self.racine = Some(Box::new(op));
    }

    pub fn evaluer(&self) -> Result<f64, ErreurCalcul> {
        match &self.racine {
            Some(op) => op.calculer(),
            None => Err(ErreurCalcul::ExpressionVide),
        }
    }
}

/* ------------------------ Opérateurs ------------------------ */

/// Tout ce qui combine un ou deux opérandes via une fonction.
#[derive(Clone, Debug)]
pub enum Operateur {
    Unaire(OperateurUnaire),
    Binaire(OperateurBinaire),
}

impl Operateur {
    pub fn calculer(&self) -> Result<f64, ErreurCalcul> {
        match self {
            Operateur::Unaire(op) => op.calculer(),
            Operateur::Binaire(op) => op.calculer(),
        }
    }

    /// Symbole enregistré ("-", "sin", "^", ...).
    pub fn symbole(&self) -> &str {
        match self {
            Operateur::Unaire(op) => op.symbole(),
            Operateur::Binaire(op) => op.symbole(),
        }
    }
}

/// Opérateur unaire : symbole + fonction + un opérande (posé après coup).
#[derive(Clone, Debug)]
pub struct OperateurUnaire {
    symbole: String,
    fonction: FonctionUnaire,
    operande: Option<Box<Operande>>,
}

impl OperateurUnaire {
    /// Copie « fente vide » : la table renvoie toujours cette forme.
    pub fn nouveau(symbole: impl Into<String>, fonction: FonctionUnaire) -> OperateurUnaire {
        OperateurUnaire {
            symbole: symbole.into(),
            fonction,
            operande: None,
        }
    }

    pub fn symbole(&self) -> &str {
        &self.symbole
    }

    /// Prend possession du sous-arbre argument.
    pub fn poser_operande(&mut self, operande: Operande) {
        self.operande = Some(Box::new(operande));
    }

    pub fn calculer(&self) -> Result<f64, ErreurCalcul> {
        let operande = self
            .operande
            .as_ref()
            .ok_or_else(|| ErreurCalcul::OperandeManquant {
                symbole: self.symbole.clone(),
            })?;
        Ok((self.fonction)(operande.evaluer()?))
    }
}

/// Opérateur binaire : symbole + fonction + rang de priorité + deux
/// opérandes (posés après coup). Ordre plus PETIT = lie plus fort
/// (évalué plus profond dans l’arbre).
#[derive(Clone, Debug)]
pub struct OperateurBinaire {
    symbole: String,
    fonction: FonctionBinaire,
    ordre: u32,
    gauche: Option<Box<Operande>>,
    droite: Option<Box<Operande>>,
}

impl OperateurBinaire {
    pub fn nouveau(
        symbole: impl Into<String>,
        fonction: FonctionBinaire,
        ordre: u32,
    ) -> OperateurBinaire {
        OperateurBinaire {
            symbole: symbole.into(),
            fonction,
            ordre,
            gauche: None,
            droite: None,
        }
    }

    pub fn symbole(&self) -> &str {
        &self.symbole
    }

    pub fn ordre(&self) -> u32 {
        self.ordre
    }

    pub fn poser_gauche(&mut self, operande: Operande) {
        self.gauche = Some(Box::new(operande));
    }

    pub fn poser_droite(&mut self, operande: Operande) {
        self.droite = Some(Box::new(operande));
    }

    pub fn calculer(&self) -> Result<f64, ErreurCalcul> {
        let gauche = self
            .gauche
            .as_ref()
            .ok_or_else(|| ErreurCalcul::OperandeManquant {
                symbole: self.symbole.clone(),
            })?;
        let droite = self
            .droite
            .as_ref()
            .ok_or_else(|| ErreurCalcul::OperandeManquant {
                symbole: self.symbole.clone(),
            })?;
        Ok((self.fonction)(gauche.evaluer()?, droite.evaluer()?))
    }
}

/* ------------------------ Rendu préfixe (polonais) ------------------------ */

// Une fente jamais posée se rend "?" : Display ne peut pas échouer, et
// l’analyseur ne laisse jamais de fente vide.

impl fmt::Display for Operande {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operande::Constante(c) => write!(f, "{c}"),
            Operande::Expression(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for Constante {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nom.is_empty() {
            write!(f, "{}", self.valeur)
        } else {
            write!(f, "{}", self.nom)
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.racine {
            Some(op) => write!(f, "{op}"),
            None => write!(f, "?"),
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operateur::Unaire(op) => write!(f, "{op}"),
            Operateur::Binaire(op) => write!(f, "{op}"),
        }
    }
}

impl fmt::Display for OperateurUnaire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.operande {
            Some(x) => write!(f, "{} {}", self.symbole, x),
            None => write!(f, "{} ?", self.symbole),
        }
    }
}

impl fmt::Display for OperateurBinaire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole)?;
        match &self.gauche {
            Some(x) => write!(f, " {x}")?,
            None => write!(f, " ?")?,
        }
        match &self.droite {
            Some(x) => write!(f, " {x}"),
            None => write!(f, " ?"),
        }
    }
}
