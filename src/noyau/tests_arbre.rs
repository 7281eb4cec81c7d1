//! Tests de l’arbre de calcul : évaluation, invariants des fentes,
//! rendu préfixe, idempotence.

use super::arbre::{
    Constante, Expression, Operande, Operateur, OperateurBinaire, OperateurUnaire,
};
use super::erreurs::ErreurCalcul;

fn constante(valeur: f64) -> Operande {
    Operande::Constante(Constante::anonyme(valeur))
}

/* ------------------------ Constante ------------------------ */

#[test]
fn constante_evalue_sa_valeur() {
    assert_eq!(Constante::anonyme(2.5).evaluer(), 2.5);
    assert_eq!(Constante::nommee(3.0, "trois").evaluer(), 3.0);
}

#[test]
fn constante_affichage() {
    // nom non vide => le nom ; nom vide => le littéral numérique
    assert_eq!(Constante::nommee(3.141592653589793, "pi").to_string(), "pi");
    assert_eq!(Constante::nommee(2.5, "2.50").to_string(), "2.50");
    assert_eq!(Constante::anonyme(0.0).to_string(), "0");
    assert_eq!(Constante::anonyme(2.5).to_string(), "2.5");
}

/* ------------------------ Invariants des fentes ------------------------ */

#[test]
fn expression_vide_refuse_evaluation() {
    let expression = Expression::vide();
    assert_eq!(expression.evaluer(), Err(ErreurCalcul::ExpressionVide));
}

#[test]
fn unaire_sans_operande_refuse_calcul() {
    let operateur = OperateurUnaire::nouveau("-", |x| -x);
    assert_eq!(
        operateur.calculer(),
        Err(ErreurCalcul::OperandeManquant {
            symbole: "-".to_string()
        })
    );
}

#[test]
fn binaire_fente_manquante_refuse_calcul() {
    let mut operateur = OperateurBinaire::nouveau("+", |a, b| a + b, 2);
    assert!(operateur.calculer().is_err());

    operateur.poser_gauche(constante(1.0));
    assert_eq!(
        operateur.calculer(),
        Err(ErreurCalcul::OperandeManquant {
            symbole: "+".to_string()
        })
    );

    operateur.poser_droite(constante(2.0));
    assert_eq!(operateur.calculer(), Ok(3.0));
}

/* ------------------------ Calculs ------------------------ */

#[test]
fn unaire_applique_sa_fonction() {
    let mut negation = OperateurUnaire::nouveau("-", |x| -x);
    negation.poser_operande(constante(2.0));
    assert_eq!(negation.calculer(), Ok(-2.0));
}

#[test]
fn arbre_compose_profond() {
    // ^ 3 (+ 1 2) = 27, construit à la main comme le ferait l'assemblage
    let mut somme = OperateurBinaire::nouveau("+", |a, b| a + b, 2);
    somme.poser_gauche(constante(1.0));
    somme.poser_droite(constante(2.0));

    let mut puissance = OperateurBinaire::nouveau("^", f64::powf, 0);
    puissance.poser_gauche(constante(3.0));
    puissance.poser_droite(Operande::Expression(Expression::depuis_racine(
        Operateur::Binaire(somme),
    )));

    let racine = Operande::Expression(Expression::depuis_racine(Operateur::Binaire(
        puissance,
    )));
    assert_eq!(racine.evaluer(), Ok(27.0));
}

#[test]
fn evaluation_idempotente() {
    let mut produit = OperateurBinaire::nouveau("*", |a, b| a * b, 1);
    produit.poser_gauche(constante(6.0));
    produit.poser_droite(constante(7.0));
    let racine = Operande::Expression(Expression::depuis_racine(Operateur::Binaire(produit)));

    // aucune mutation cachée : deux évaluations, même résultat
    assert_eq!(racine.evaluer(), Ok(42.0));
    assert_eq!(racine.evaluer(), Ok(42.0));
}

/* ------------------------ Rendu préfixe ------------------------ */

#[test]
fn rendu_prefixe_unaire() {
    let mut negation = OperateurUnaire::nouveau("-", |x| -x);
    negation.poser_operande(Operande::Constante(Constante::nommee(2.0, "2")));
    assert_eq!(negation.to_string(), "- 2");
}

#[test]
fn rendu_prefixe_binaire() {
    let mut difference = OperateurBinaire::nouveau("-", |a, b| a - b, 2);
    difference.poser_gauche(Operande::Constante(Constante::nommee(3.0, "3")));
    difference.poser_droite(Operande::Constante(Constante::nommee(2.0, "2")));
    assert_eq!(difference.to_string(), "- 3 2");

    let racine = Operande::Expression(Expression::depuis_racine(Operateur::Binaire(
        difference,
    )));
    assert_eq!(racine.to_string(), "- 3 2");
}

#[test]
fn rendu_fente_vide() {
    // jamais produit par l'analyseur; Display reste total malgré tout
    assert_eq!(Expression::vide().to_string(), "?");
    assert_eq!(OperateurUnaire::nouveau("sin", f64::sin).to_string(), "sin ?");
    assert_eq!(
        OperateurBinaire::nouveau("+", |a, b| a + b, 2).to_string(),
        "+ ? ?"
    );
}
