//! Noyau d’analyse infixe
//!
//! Organisation interne :
//! - erreurs.rs : taxonomie (table / analyse / calcul)
//! - arbre.rs   : arbre de calcul (Operande / Operateur) + rendu préfixe
//! - table.rs   : table de symboles (constantes, unaires, binaires)
//! - analyse.rs : analyse descendante + assemblage « maillon faible »
//!
//! Flux : l’appelant construit une TableSymboles (une fois, avant toute
//! analyse), passe une chaîne à analyser_expression, puis évalue/affiche
//! l’opérande racine retourné.

pub mod analyse;
pub mod arbre;
pub mod erreurs;
pub mod table;

#[cfg(test)]
mod tests_arbre;



// API publique minimale
pub use analyse::analyser_expression;
pub use table::TableSymboles;
