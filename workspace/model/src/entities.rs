//! This file serves as the root for all SeaORM entity modules.
//! We define the data models for the inventory tracking application here:
//! registered users and the product records they manage.

pub mod product;
pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::product::Entity as Product;
    pub use super::user::Entity as User;
}

#[cfg(test)]
mod test {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, DbErr, EntityTrait,
        QueryFilter, Set,
    };

    use super::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        // Connect to the SQLite database
        let db = Database::connect("sqlite::memory:").await?;

        // Apply migrations
        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    #[tokio::test]
    async fn test_entity_integration() -> Result<(), DbErr> {
        let db = setup_db().await?;

        // Create users
        let user1 = user::ActiveModel {
            username: Set("user1".to_string()),
            password_hash: Set("$argon2id$fake-hash-1".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let user2 = user::ActiveModel {
            username: Set("user2".to_string()),
            password_hash: Set("$argon2id$fake-hash-2".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Create products
        let widget = product::ActiveModel {
            product_id: Set("P-001".to_string()),
            product_name: Set("Widget".to_string()),
            quantity: Set(12),
            arrival_date: Set("2024-01-05".to_string()),
            source: Set("Acme Corp".to_string()),
            box_id: Set("B-7".to_string()),
            unit_price: Set(3.5),
        }
        .insert(&db)
        .await?;

        let gadget = product::ActiveModel {
            product_id: Set("P-002".to_string()),
            product_name: Set("Gadget".to_string()),
            quantity: Set(4),
            arrival_date: Set("2024-02-11".to_string()),
            source: Set("Globex".to_string()),
            box_id: Set("B-2".to_string()),
            unit_price: Set(19.99),
        }
        .insert(&db)
        .await?;

        // Verify users
        let users = User::find().all(&db).await?;
        assert_eq!(users.len(), 2);
        assert!(users.iter().any(|u| u.username == user1.username));
        assert!(users.iter().any(|u| u.username == user2.username));

        // Username uniqueness is enforced by the schema
        let dup = user::ActiveModel {
            username: Set("user1".to_string()),
            password_hash: Set("$argon2id$fake-hash-3".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await;
        assert!(dup.is_err());

        // Verify products
        let products = Product::find().all(&db).await?;
        assert_eq!(products.len(), 2);
        assert!(products.iter().any(|p| p.product_id == widget.product_id));
        assert!(products.iter().any(|p| p.product_id == gadget.product_id));

        // Product ids are primary keys; re-inserting one must fail
        let dup_product = product::ActiveModel {
            product_id: Set("P-001".to_string()),
            product_name: Set("Widget".to_string()),
            quantity: Set(1),
            arrival_date: Set("2024-03-01".to_string()),
            source: Set("Acme Corp".to_string()),
            box_id: Set("B-9".to_string()),
            unit_price: Set(3.5),
        }
        .insert(&db)
        .await;
        assert!(dup_product.is_err());

        // Lookup by primary key and by column filter
        let found = Product::find_by_id("P-002").one(&db).await?;
        assert_eq!(found.map(|p| p.product_name), Some("Gadget".to_string()));

        let from_globex = Product::find()
            .filter(product::Column::Source.eq("Globex"))
            .all(&db)
            .await?;
        assert_eq!(from_globex.len(), 1);

        Ok(())
    }
}
