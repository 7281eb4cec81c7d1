// src/main.rs
//
// Calculatrice infixe — boucle interactive
// ----------------------------------------
// Lit une expression par ligne, l'analyse avec la table intégrée, puis
// affiche le rendu préfixe (polonais) suivi de la valeur numérique.
// En cas d'erreur d'analyse : la ligne, un caret sous la position fautive,
// et le message — puis on continue. Ligne vide (ou EOF/Ctrl-C) => fin.

mod noyau;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use noyau::{analyser_expression, TableSymboles};

const INVITE: &str = "> ";

fn main() {
    env_logger::init();

    // Une seule construction, avant toute analyse.
    let table = TableSymboles::integree();

    let mut editeur = match DefaultEditor::new() {
        Ok(editeur) => editeur,
        Err(e) => {
            eprintln!("erreur: initialisation de la lecture de ligne: {e}");
            std::process::exit(2);
        }
    };

    loop {
        let ligne = match editeur.readline(INVITE) {
            Ok(ligne) => ligne,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("erreur de lecture: {e}");
                break;
            }
        };
        if ligne.is_empty() {
            break;
        }
        let _ = editeur.add_history_entry(&ligne);

        let racine = match analyser_expression(&table, &ligne, 0) {
            Ok(racine) => racine,
            Err(e) => {
                println!("{ligne}");
                println!("{}^", " ".repeat(e.position()));
                println!("{e}");
                continue;
            }
        };

        println!("{racine}");
        match racine.evaluer() {
            Ok(valeur) => println!("{valeur}"),
            // Inatteignable sur une sortie d'analyse; signalé proprement
            // quand même plutôt que panique.
            Err(e) => println!("{e}"),
        }
    }
}
