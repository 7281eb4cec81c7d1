// src/noyau/erreurs.rs
//
// Taxonomie d’erreurs du noyau.
// - ErreurTable   : mauvais usage de la table (message seul, pas de position)
// - ErreurAnalyse : échec d’analyse (message + position absolue en caractères)
// - ErreurCalcul  : invariant d’évaluation violé (arbre mal construit)
//
// NOTE: les positions sont des offsets 0-based en CARACTÈRES dans la chaîne
// d’origine, jamais dans une sous-chaîne (cf. re-basage des parenthèses
// dans analyse.rs).

use thiserror::Error;

/// Erreurs de la table de symboles (enregistrement / recherche).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurTable {
    #[error("Nom invalide \"{0}\".")]
    NomInvalide(String),

    #[error("Aucun symbole enregistré sous le nom \"{0}\".")]
    NomIntrouvable(String),
}

/// Erreurs d’analyse. Chaque variante porte la position (caractère, 0-based)
/// où l’échec a été détecté, relative à l’entrée de départ.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurAnalyse {
    #[error("Fin d'expression inattendue.")]
    FinInattendue { position: usize },

    #[error("Un opérande était attendu ici, mais rien ne correspond.")]
    OperandeAttendu { position: usize },

    #[error("Un opérateur binaire était attendu ici, mais rien ne correspond.")]
    OperateurAttendu { position: usize },

    #[error("Constante numérique trop grande pour être représentée.")]
    NombreTropGrand { position: usize },
}

impl ErreurAnalyse {
    /// Position absolue (caractères) de l’échec.
    pub fn position(&self) -> usize {
        match self {
            ErreurAnalyse::FinInattendue { position }
            | ErreurAnalyse::OperandeAttendu { position }
            | ErreurAnalyse::OperateurAttendu { position }
            | ErreurAnalyse::NombreTropGrand { position } => *position,
        }
    }

    /// Re-base la position (utilisé au franchissement d’un groupe
    /// parenthésé : l’erreur interne est décalée vers l’offset externe).
    pub(crate) fn decalee(self, decalage: usize) -> ErreurAnalyse {
        match self {
            ErreurAnalyse::FinInattendue { position } => ErreurAnalyse::FinInattendue {
                position: position + decalage,
            },
            ErreurAnalyse::OperandeAttendu { position } => ErreurAnalyse::OperandeAttendu {
                position: position + decalage,
            },
            ErreurAnalyse::OperateurAttendu { position } => ErreurAnalyse::OperateurAttendu {
                position: position + decalage,
            },
            ErreurAnalyse::NombreTropGrand { position } => ErreurAnalyse::NombreTropGrand {
                position: position + decalage,
            },
        }
    }
}

/// Erreurs d’évaluation. Inatteignables si l’arbre sort de l’analyseur;
/// détectées proprement quand même (arbre construit à la main, racine
/// absente, opérande jamais posé).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurCalcul {
    #[error("Évaluation d'une expression vide (racine absente).")]
    ExpressionVide,

    #[error("Calcul d'un opérateur \"{symbole}\" sans opérande.")]
    OperandeManquant { symbole: String },
}
