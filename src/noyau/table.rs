// src/noyau/table.rs
//
// Table de symboles : registre nom -> constante / opérateur unaire /
// opérateur binaire (avec rang de priorité), consulté par l’analyseur.
//
// Valeur explicite possédée par l’appelant (pas d’état global caché) :
// construite une fois au démarrage, puis passée par référence partagée.
// Un seul écrivain avant plusieurs lecteurs — pas de synchronisation.
//
// Règles:
// - enregistrement append-only, les doublons sont PERMIS;
// - recherche = balayage linéaire, premier nom exact trouvé
//   (donc en cas de doublon, le PREMIER enregistrement gagne);
// - les recherches renvoient des COPIES indépendantes (fentes d’opérandes
//   vides), jamais de référence dans la table.

use super::arbre::{Constante, FonctionBinaire, FonctionUnaire, OperateurBinaire, OperateurUnaire};
use super::erreurs::ErreurTable;

struct EntreeConstante {
    nom: String,
    valeur: f64,
}

struct EntreeUnaire {
    nom: String,
    fonction: FonctionUnaire,
}

struct EntreeBinaire {
    nom: String,
    fonction: FonctionBinaire,
    ordre: u32,
}

/// Registre de décodage texte -> maths.
#[derive(Default)]
pub struct TableSymboles {
    constantes: Vec<EntreeConstante>,
    unaires: Vec<EntreeUnaire>,
    binaires: Vec<EntreeBinaire>,
}

impl TableSymboles {
    /// Table vide, sans aucun symbole.
    pub fn vide() -> TableSymboles {
        TableSymboles::default()
    }

    /// Table peuplée des symboles intégrés. À construire une seule fois,
    /// avant toute analyse.
    pub fn integree() -> TableSymboles {
        let mut table = TableSymboles::vide();

        // Les noms intégrés sont tous valides : l’échec est impossible ici.
        let _ = table.enregistrer_constante("pi", 3.141592653589793);
        let _ = table.enregistrer_constante("e", 2.718281828459045);

        let _ = table.enregistrer_unaire("-", |x| -x);
        let _ = table.enregistrer_unaire("abs", f64::abs);
        let _ = table.enregistrer_unaire("sin", f64::sin);
        let _ = table.enregistrer_unaire("cos", f64::cos);
        let _ = table.enregistrer_unaire("tg", f64::tan);
        let _ = table.enregistrer_unaire("ctg", |x| 1.0 / x.tan());
        let _ = table.enregistrer_unaire("ln", f64::ln);
        let _ = table.enregistrer_unaire("log", f64::log10);
        let _ = table.enregistrer_unaire("sqrt", f64::sqrt);

        // ordre: 0 lie le plus fort, 2 le plus faible
        let _ = table.enregistrer_binaire("^", f64::powf, 0);
        let _ = table.enregistrer_binaire("*", |a, b| a * b, 1);
        let _ = table.enregistrer_binaire("/", |a, b| a / b, 1);
        let _ = table.enregistrer_binaire("+", |a, b| a + b, 2);
        let _ = table.enregistrer_binaire("-", |a, b| a - b, 2);

        table
    }

    /* ------------------------ Validation des noms ------------------------ */

    /// Un nom est valide s’il est non vide, ne commence pas par un chiffre,
    /// et ne contient que des caractères visibles (imprimables, non blancs).
    pub fn nom_valide(nom: &str) -> bool {
        let mut caracteres = nom.chars();
        match caracteres.next() {
            None => return false,
            Some(premier) if premier.is_ascii_digit() => return false,
            Some(premier) if !caractere_visible(premier) => return false,
            Some(_) => {}
        }
        caracteres.all(caractere_visible)
    }

    /// Un littéral numérique commence forcément par un chiffre
    /// (le point décimal vient ensuite, jamais en tête).
    pub fn debut_de_nombre(c: char) -> bool {
        c.is_ascii_digit()
    }

    /* ------------------------ Enregistrement ------------------------ */

    pub fn enregistrer_constante(&mut self, nom: &str, valeur: f64) -> Result<(), ErreurTable> {
        if !TableSymboles::nom_valide(nom) {
            return Err(ErreurTable::NomInvalide(nom.to_string()));
        }
        self.constantes.push(EntreeConstante {
            nom: nom.to_string(),
            valeur,
        });
        Ok(())
    }

    pub fn enregistrer_unaire(
        &mut self,
        nom: &str,
        fonction: FonctionUnaire,
    ) -> Result<(), ErreurTable> {
        if !TableSymboles::nom_valide(nom) {
            return Err(ErreurTable::NomInvalide(nom.to_string()));
        }
        self.unaires.push(EntreeUnaire {
            nom: nom.to_string(),
            fonction,
        });
        Ok(())
    }

    pub fn enregistrer_binaire(
        &mut self,
        nom: &str,
        fonction: FonctionBinaire,
        ordre: u32,
    ) -> Result<(), ErreurTable> {
        if !TableSymboles::nom_valide(nom) {
            return Err(ErreurTable::NomInvalide(nom.to_string()));
        }
        self.binaires.push(EntreeBinaire {
            nom: nom.to_string(),
            fonction,
            ordre,
        });
        Ok(())
    }

    /* ------------------------ Appartenance ------------------------ */

    // Jamais d’erreur ici : un nom malformé est simplement absent.

    pub fn est_constante(&self, nom: &str) -> bool {
        TableSymboles::nom_valide(nom) && self.constantes.iter().any(|e| e.nom == nom)
    }

    pub fn est_unaire(&self, nom: &str) -> bool {
        TableSymboles::nom_valide(nom) && self.unaires.iter().any(|e| e.nom == nom)
    }

    pub fn est_binaire(&self, nom: &str) -> bool {
        TableSymboles::nom_valide(nom) && self.binaires.iter().any(|e| e.nom == nom)
    }

    /* ------------------------ Recherche ------------------------ */

    /// Copie de la première constante enregistrée sous ce nom.
    pub fn constante(&self, nom: &str) -> Result<Constante, ErreurTable> {
        if !TableSymboles::nom_valide(nom) {
            return Err(ErreurTable::NomInvalide(nom.to_string()));
        }
        self.chercher_constante(nom)
            .ok_or_else(|| ErreurTable::NomIntrouvable(nom.to_string()))
    }

    /// Copie (fente d’opérande vide) du premier opérateur unaire trouvé.
    pub fn operateur_unaire(&self, nom: &str) -> Result<OperateurUnaire, ErreurTable> {
        if !TableSymboles::nom_valide(nom) {
            return Err(ErreurTable::NomInvalide(nom.to_string()));
        }
        self.chercher_unaire(nom)
            .ok_or_else(|| ErreurTable::NomIntrouvable(nom.to_string()))
    }

    /// Copie (fentes gauche/droite vides) du premier opérateur binaire trouvé.
    pub fn operateur_binaire(&self, nom: &str) -> Result<OperateurBinaire, ErreurTable> {
        if !TableSymboles::nom_valide(nom) {
            return Err(ErreurTable::NomInvalide(nom.to_string()));
        }
        self.chercher_binaire(nom)
            .ok_or_else(|| ErreurTable::NomIntrouvable(nom.to_string()))
    }

    // Variantes Option pour la boucle de croissance de l’analyseur
    // (pas de validation de nom : un préfixe en cours de croissance peut
    // être n’importe quoi, l’absence suffit).

    pub(crate) fn chercher_constante(&self, nom: &str) -> Option<Constante> {
        self.constantes
            .iter()
            .find(|e| e.nom == nom)
            .map(|e| Constante::nommee(e.valeur, e.nom.clone()))
    }

    pub(crate) fn chercher_unaire(&self, nom: &str) -> Option<OperateurUnaire> {
        self.unaires
            .iter()
            .find(|e| e.nom == nom)
            .map(|e| OperateurUnaire::nouveau(e.nom.clone(), e.fonction))
    }

    pub(crate) fn chercher_binaire(&self, nom: &str) -> Option<OperateurBinaire> {
        self.binaires
            .iter()
            .find(|e| e.nom == nom)
            .map(|e| OperateurBinaire::nouveau(e.nom.clone(), e.fonction, e.ordre))
    }
}

/// Visible = imprimable et non blanc (équivalent élargi de isgraph,
/// applicable au-delà de l’ASCII).
fn caractere_visible(c: char) -> bool {
    !c.is_whitespace() && !c.is_control()
}
