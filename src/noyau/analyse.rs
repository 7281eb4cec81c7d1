// src/noyau/analyse.rs
//
// Analyse descendante d’une expression infixe, sans tokenisation préalable :
// le curseur avance caractère par caractère et consulte la table de symboles
// pour classer ce qu’il voit (constante, opérateur unaire, opérateur binaire).
//
// Déroulé:
// 1) boucle de tête : opérande, puis (tant qu’il reste de l’entrée)
//    opérateur binaire, en alternance -> deux séquences [o0..on] / [p0..pn-1]
// 2) assemblage : récursion « maillon faible » (l’opérateur au rang le plus
//    élevé, le plus à droite en cas d’égalité, devient racine du sous-arbre)
//
// Reconnaissance des noms : correspondance par préfixe croissant — le
// candidat grandit d’un caractère à la fois jusqu’à égaler exactement un nom
// enregistré. Si un nom enregistré est préfixe d’un autre ("-" et "->"),
// le premier trouvé par la boucle gagne : ambiguïté assumée, dépendante du
// contenu de la table, documentée et non « corrigée ».
//
// Toutes les positions d’erreur sont absolues (caractères, 0-based) dans la
// chaîne d’origine : une erreur survenue dans un groupe parenthésé est
// re-basée au franchissement du groupe.

use log::trace;

use super::arbre::{Constante, Expression, Operande, Operateur, OperateurBinaire, OperateurUnaire};
use super::erreurs::ErreurAnalyse;
use super::table::TableSymboles;

/// Analyse `texte` à partir de `debut` et retourne l’opérande racine.
///
/// Entrée vide => Constante(0) anonyme (élément neutre volontaire, pas une
/// erreur). L’appelant évalue ensuite via `Operande::evaluer`.
pub fn analyser_expression(
    table: &TableSymboles,
    texte: &str,
    debut: usize,
) -> Result<Operande, ErreurAnalyse> {
    let chaine: Vec<char> = texte.chars().collect();
    analyser(table, &chaine, debut)
}

/* ------------------------ Boucle de tête ------------------------ */

fn analyser(
    table: &TableSymboles,
    chaine: &[char],
    debut: usize,
) -> Result<Operande, ErreurAnalyse> {
    let longueur = chaine.len();
    if longueur == 0 {
        return Ok(Operande::Constante(Constante::anonyme(0.0)));
    }

    // En tête, il y aura forcément une constante ou un opérateur unaire
    // avec son propre opérande. Sinon rien n’est analysable de toute façon :
    // l’erreur remontée par analyser_operande convient telle quelle.
    let mut pos = debut;
    let mut operandes: Vec<Operande> = Vec::new();
    let mut operateurs: Vec<OperateurBinaire> = Vec::new();
    loop {
        pos = sauter_blancs(chaine, pos);
        operandes.push(analyser_operande(table, chaine, &mut pos)?);
        pos = sauter_blancs(chaine, pos);
        if pos >= longueur {
            break;
        }
        operateurs.push(analyser_operateur(table, chaine, &mut pos)?);
    }

    trace!(
        "séquences prêtes: {} opérande(s), {} opérateur(s)",
        operandes.len(),
        operateurs.len()
    );
    Ok(assembler(operandes, operateurs))
}

fn sauter_blancs(chaine: &[char], depart: usize) -> usize {
    let mut pos = depart;
    while pos < chaine.len() && chaine[pos].is_whitespace() {
        pos += 1;
    }
    pos
}

/* ------------------------ Opérandes ------------------------ */

/// Un opérande est, au choix :
/// - un groupe parenthésé (analysé récursivement comme une expression
///   complète à part entière),
/// - un littéral numérique,
/// - un opérateur unaire appliqué à l’opérande qui le suit,
/// - une constante nommée (repli si la piste unaire échoue).
fn analyser_operande(
    table: &TableSymboles,
    chaine: &[char],
    pos: &mut usize,
) -> Result<Operande, ErreurAnalyse> {
    let longueur = chaine.len();
    if *pos >= longueur {
        return Err(ErreurAnalyse::FinInattendue { position: *pos });
    }
    let mut courant = sauter_blancs(chaine, *pos);
    if courant == longueur {
        return Err(ErreurAnalyse::OperandeAttendu { position: courant });
    }

    let sauvegarde = courant;
    let resultat: Operande;
    if chaine[courant] == '(' {
        // Recherche de la parenthèse fermante appariée (compteur de
        // profondeur : les groupes imbriqués sont traversés, pas analysés).
        let mut compteur: usize = 1;
        courant += 1;
        while courant < longueur && compteur > 0 {
            match chaine[courant] {
                '(' => compteur += 1,
                ')' => compteur -= 1,
                _ => {}
            }
            courant += 1;
        }
        if compteur != 0 {
            return Err(ErreurAnalyse::FinInattendue { position: courant });
        }
        // Contenu strictement intérieur, analysé comme une expression de
        // tête ; toute erreur interne est re-basée vers la chaîne externe.
        let interieur = &chaine[sauvegarde + 1..courant - 1];
        resultat = analyser(table, interieur, 0).map_err(|e| e.decalee(sauvegarde + 1))?;
    } else if TableSymboles::debut_de_nombre(chaine[courant]) {
        resultat = Operande::Constante(analyser_valeur(chaine, &mut courant)?);
    } else {
        // Piste unaire d’abord; en cas d’échec (quelle qu’en soit la raison,
        // y compris dans l’opérande récursif), on revient en arrière et on
        // tente une constante nommée au même endroit.
        match analyser_application_unaire(table, chaine, &mut courant) {
            Ok(operande) => resultat = operande,
            Err(_) => {
                courant = sauvegarde;
                match analyser_constante(table, chaine, &mut courant) {
                    Ok(constante) => resultat = Operande::Constante(constante),
                    Err(ErreurAnalyse::FinInattendue { .. }) => {
                        return Err(ErreurAnalyse::OperandeAttendu {
                            position: sauvegarde,
                        });
                    }
                    Err(autre) => return Err(autre),
                }
            }
        }
    }
    *pos = courant;
    Ok(resultat)
}

/// Littéral numérique le plus long possible : chiffres, partie décimale
/// optionnelle, exposant optionnel (consommé seulement s’il est suivi de
/// chiffres). Le nom de la Constante garde le texte exact consommé.
fn analyser_valeur(chaine: &[char], pos: &mut usize) -> Result<Constante, ErreurAnalyse> {
    let longueur = chaine.len();
    let depart = *pos;
    let mut courant = depart;

    while courant < longueur && chaine[courant].is_ascii_digit() {
        courant += 1;
    }
    if courant < longueur && chaine[courant] == '.' {
        courant += 1;
        while courant < longueur && chaine[courant].is_ascii_digit() {
            courant += 1;
        }
    }
    if courant < longueur && (chaine[courant] == 'e' || chaine[courant] == 'E') {
        let mut apres = courant + 1;
        if apres < longueur && (chaine[apres] == '+' || chaine[apres] == '-') {
            apres += 1;
        }
        if apres < longueur && chaine[apres].is_ascii_digit() {
            courant = apres + 1;
            while courant < longueur && chaine[courant].is_ascii_digit() {
                courant += 1;
            }
        }
    }

    let texte: String = chaine[depart..courant].iter().collect();
    let valeur: f64 = texte
        .parse()
        .map_err(|_| ErreurAnalyse::NombreTropGrand { position: depart })?;
    // from_str sature vers l'infini au lieu d'échouer : même refus que stod.
    if !valeur.is_finite() {
        return Err(ErreurAnalyse::NombreTropGrand { position: depart });
    }

    *pos = courant;
    Ok(Constante::nommee(valeur, texte))
}

/// Opérateur unaire + son argument (un opérande complet, récursif),
/// le tout enveloppé dans une Expression pour redevenir un opérande.
fn analyser_application_unaire(
    table: &TableSymboles,
    chaine: &[char],
    pos: &mut usize,
) -> Result<Operande, ErreurAnalyse> {
    let mut operateur = analyser_unaire(table, chaine, pos)?;
    let argument = analyser_operande(table, chaine, pos)?;
    operateur.poser_operande(argument);
    Ok(Operande::Expression(Expression::depuis_racine(
        Operateur::Unaire(operateur),
    )))
}

/* ------------------------ Correspondance par préfixe croissant ------------------------ */

fn analyser_unaire(
    table: &TableSymboles,
    chaine: &[char],
    pos: &mut usize,
) -> Result<OperateurUnaire, ErreurAnalyse> {
    let longueur = chaine.len();
    let mut courant = *pos;
    let mut candidat = String::new();
    candidat.push(chaine[courant]);
    loop {
        if let Some(operateur) = table.chercher_unaire(&candidat) {
            trace!("unaire reconnu: {candidat:?} à {pos}", pos = *pos);
            *pos = courant + 1;
            return Ok(operateur);
        }
        courant += 1;
        if courant == longueur {
            return Err(ErreurAnalyse::FinInattendue { position: courant });
        }
        candidat.push(chaine[courant]);
    }
}

fn analyser_constante(
    table: &TableSymboles,
    chaine: &[char],
    pos: &mut usize,
) -> Result<Constante, ErreurAnalyse> {
    let longueur = chaine.len();
    let mut courant = *pos;
    let mut candidat = String::new();
    candidat.push(chaine[courant]);
    loop {
        if let Some(constante) = table.chercher_constante(&candidat) {
            *pos = courant + 1;
            return Ok(constante);
        }
        courant += 1;
        if courant == longueur {
            return Err(ErreurAnalyse::FinInattendue { position: courant });
        }
        candidat.push(chaine[courant]);
    }
}

/* ------------------------ Opérateurs binaires ------------------------ */

fn analyser_operateur(
    table: &TableSymboles,
    chaine: &[char],
    pos: &mut usize,
) -> Result<OperateurBinaire, ErreurAnalyse> {
    let longueur = chaine.len();
    if *pos >= longueur {
        return Err(ErreurAnalyse::FinInattendue { position: longueur });
    }
    let mut courant = sauter_blancs(chaine, *pos);
    if courant == longueur {
        return Err(ErreurAnalyse::OperateurAttendu { position: *pos });
    }

    let mut candidat = String::new();
    candidat.push(chaine[courant]);
    loop {
        if let Some(operateur) = table.chercher_binaire(&candidat) {
            *pos = courant + 1;
            return Ok(operateur);
        }
        courant += 1;
        if courant == longueur {
            return Err(ErreurAnalyse::FinInattendue { position: courant });
        }
        candidat.push(chaine[courant]);
    }
}

/* ------------------------ Assemblage (maillon faible) ------------------------ */

/// Replie les deux séquences en arbre. L’opérateur au rang numérique le plus
/// ÉLEVÉ (liaison la plus lâche, évalué en dernier) devient racine; en cas
/// d’égalité le plus à DROITE gagne, ce qui rend les chaînes de même rang
/// associatives à gauche (3-2-1 == (3-2)-1).
///
/// Invariant d’appel : operandes.len() == operateurs.len() + 1.
fn assembler(mut operandes: Vec<Operande>, mut operateurs: Vec<OperateurBinaire>) -> Operande {
    debug_assert_eq!(operandes.len(), operateurs.len() + 1);

    if operateurs.is_empty() {
        let Some(seul) = operandes.pop() else {
            // Jamais atteint depuis l'analyse (l'invariant impose 1 opérande).
            return Operande::Constante(Constante::anonyme(0.0));
        };
        return seul;
    }

    let mut faible = 0;
    for (indice, operateur) in operateurs.iter().enumerate().skip(1) {
        if operateurs[faible].ordre() <= operateur.ordre() {
            faible = indice;
        }
    }
    trace!(
        "maillon faible: {:?} (ordre {}) en position {faible}",
        operateurs[faible].symbole(),
        operateurs[faible].ordre()
    );

    // Découpe: [o0..=o_faible] + [p0..p_faible-1] à gauche,
    //          [o_faible+1..]  + [p_faible+1..]   à droite.
    let operateurs_droite = operateurs.split_off(faible + 1);
    let operandes_droite = operandes.split_off(faible + 1);
    let Some(mut racine) = operateurs.pop() else {
        // Jamais atteint : faible est un indice valide de `operateurs`.
        return Operande::Constante(Constante::anonyme(0.0));
    };

    racine.poser_gauche(assembler(operandes, operateurs));
    racine.poser_droite(assembler(operandes_droite, operateurs_droite));
    Operande::Expression(Expression::depuis_racine(Operateur::Binaire(racine)))
}
