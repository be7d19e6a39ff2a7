//! Foreign-key display resolution for the table screens.
//!
//! Each index is built once per fetched sibling list and reused for
//! every row; ids whose parent is missing resolve to the "Unknown"
//! sentinel instead of failing.

use crate::listing::DisplayIndex;
use crate::models::category::CategoryDto;
use crate::models::fournisseur::FournisseurDto;
use crate::models::product::ProductDto;
use crate::models::visite::VisiteDto;

fn id_of(id: &Option<String>) -> &str {
    id.as_deref().unwrap_or("")
}

pub fn fournisseur_index(fournisseurs: &[FournisseurDto]) -> DisplayIndex {
    DisplayIndex::new(fournisseurs, |f| id_of(&f.id), |f| f.nom.clone())
}

pub fn category_index(categories: &[CategoryDto]) -> DisplayIndex {
    DisplayIndex::new(categories, |c| id_of(&c.id), |c| c.name.clone())
}

pub fn product_index(products: &[ProductDto]) -> DisplayIndex {
    DisplayIndex::new(products, |p| id_of(&p.id), |p| p.name.clone())
}

/// Factures display the visited client, resolved through the visite.
pub fn visite_index(visites: &[VisiteDto]) -> DisplayIndex {
    DisplayIndex::new(visites, |v| id_of(&v.id), |v| v.fullname.clone())
}

/// The order table shows its products as one comma-separated cell.
pub fn product_names(product_ids: &[String], products: &DisplayIndex) -> String {
    product_ids
        .iter()
        .map(|id| products.resolve(id))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::UNKNOWN;

    fn fournisseurs() -> Vec<FournisseurDto> {
        vec![FournisseurDto {
            id: Some("f-1".into()),
            nom: "Optic Distribution".into(),
            adresse: "Casablanca".into(),
            telephone: "0522456789".into(),
        }]
    }

    #[test]
    fn known_id_resolves_to_the_display_name() {
        let index = fournisseur_index(&fournisseurs());
        assert_eq!(index.resolve("f-1"), "Optic Distribution");
    }

    #[test]
    fn stale_id_resolves_to_unknown_instead_of_failing() {
        let index = fournisseur_index(&fournisseurs());
        assert_eq!(index.resolve("f-deleted"), UNKNOWN);
    }

    #[test]
    fn order_cell_joins_resolved_product_names() {
        let products = vec![
            ProductDto {
                id: Some("p-1".into()),
                name: "Monture acétate".into(),
                description: String::new(),
                price: Some(180.0),
                price_for_sale: Some(350.0),
                quantity: Some(12),
                category_id: "c-1".into(),
                fournisseur_id: "f-1".into(),
            },
            ProductDto {
                id: Some("p-2".into()),
                name: "Etui rigide".into(),
                description: String::new(),
                price: Some(20.0),
                price_for_sale: Some(45.0),
                quantity: Some(30),
                category_id: "c-2".into(),
                fournisseur_id: "f-1".into(),
            },
        ];
        let index = product_index(&products);
        let ids = vec!["p-1".to_string(), "p-missing".to_string(), "p-2".to_string()];
        assert_eq!(
            product_names(&ids, &index),
            "Monture acétate, Unknown, Etui rigide"
        );
    }
}
