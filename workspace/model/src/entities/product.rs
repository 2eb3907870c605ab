use sea_orm::entity::prelude::*;

/// One product record in the inventory.
///
/// `product_id` is a caller-supplied string key, not an autoincrement id,
/// so inserting an existing id trips the primary-key constraint.
/// `arrival_date` is stored as a `YYYY-MM-DD` string; date range filtering
/// relies on the lexicographic ordering of that zero-padded form.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "inventory")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: String,
    pub product_name: String,
    pub quantity: i64,
    pub arrival_date: String,
    /// Free-text vendor/origin name, matched case-insensitively by the
    /// summary filter.
    pub source: String,
    pub box_id: String,
    pub unit_price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
