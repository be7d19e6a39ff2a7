use crate::auth::hash_password;
use crate::models::{category, client, facture, fournisseur, product, user, visite};
use sea_orm::*;
use uuid::Uuid;

/// Seeds the demo dataset. Users are inserted idempotently; the rest
/// is skipped entirely when the catalogue already has data.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    let now = chrono::Utc::now().to_rfc3339();

    // 1. Admin user
    let admin_password =
        hash_password("admin").map_err(|e| DbErr::Custom(format!("hash failed: {}", e)))?;

    let admin = user::ActiveModel {
        username: Set("admin".to_owned()),
        password_hash: Set(admin_password),
        role: Set("admin".to_owned()),
        created_at: Set(now.clone()),
        updated_at: Set(now.clone()),
        ..Default::default()
    };

    match user::Entity::insert(admin)
        .on_conflict(
            sea_orm::sea_query::OnConflict::column(user::Column::Username)
                .do_nothing()
                .to_owned(),
        )
        .exec(db)
        .await
    {
        Ok(_) | Err(DbErr::RecordNotInserted) => {}
        Err(e) => return Err(e),
    }

    // 2. Demo records, once
    if category::Entity::find().count(db).await? > 0 {
        return Ok(());
    }

    let category_id = Uuid::new_v4().to_string();
    category::ActiveModel {
        id: Set(category_id.clone()),
        name: Set("Montures".to_owned()),
        created_at: Set(now.clone()),
        updated_at: Set(now.clone()),
    }
    .insert(db)
    .await?;

    let fournisseur_id = Uuid::new_v4().to_string();
    fournisseur::ActiveModel {
        id: Set(fournisseur_id.clone()),
        nom: Set("Optic Distribution".to_owned()),
        adresse: Set("12 Rue des Lunetiers, Casablanca".to_owned()),
        telephone: Set("0522456789".to_owned()),
        created_at: Set(now.clone()),
        updated_at: Set(now.clone()),
    }
    .insert(db)
    .await?;

    product::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        name: Set("Monture acétate noire".to_owned()),
        description: Set("Monture unisexe, charnières flex".to_owned()),
        price: Set(180.0),
        price_for_sale: Set(350.0),
        quantity: Set(12),
        category_id: Set(category_id),
        fournisseur_id: Set(fournisseur_id),
        created_at: Set(now.clone()),
        updated_at: Set(now.clone()),
    }
    .insert(db)
    .await?;

    client::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        nom: Set("Berrada".to_owned()),
        prenom: Set("Amina".to_owned()),
        telephone: Set("0612345678".to_owned()),
        created_at: Set(now.clone()),
        updated_at: Set(now.clone()),
    }
    .insert(db)
    .await?;

    let visite_id = Uuid::new_v4().to_string();
    visite::ActiveModel {
        id: Set(visite_id.clone()),
        fullname: Set("Amina Berrada".to_owned()),
        telephone: Set("0612345678".to_owned()),
        date_visite: Set("2024-04-02".to_owned()),
        od_sphere: Set("-1.25".to_owned()),
        od_cylinder: Set("-0.50".to_owned()),
        od_axis: Set(90.0),
        os_sphere: Set("-1.00".to_owned()),
        os_cylinder: Set("-0.75".to_owned()),
        os_axis: Set(85.0),
        addition: Set(1.5),
        pd: Set("62".to_owned()),
        verre_od: Set("Organique 1.5 AR".to_owned()),
        verre_os: Set("Organique 1.5 AR".to_owned()),
        price_od: Set(500.0),
        price_os: Set(500.0),
        prix_monture: Set(300.0),
        total: Set(1300.0),
        avance: Set(800.0),
        reste: Set(500.0),
        remise: Set(0.0),
        doctor: Set("Dr. El Fassi".to_owned()),
        created_at: Set(now.clone()),
        updated_at: Set(now.clone()),
    }
    .insert(db)
    .await?;

    facture::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        n_facture: Set("384512".to_owned()),
        date_facture: Set("2024-04-03".to_owned()),
        visite_id: Set(visite_id),
        created_at: Set(now.clone()),
        updated_at: Set(now),
    }
    .insert(db)
    .await?;

    Ok(())
}
