pub mod category;
pub mod client;
pub mod facture;
pub mod fournisseur;
pub mod order;
pub mod product;
pub mod user;
pub mod vente;
pub mod visite;
