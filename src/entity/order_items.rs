use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "order_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub order_id: i32,
    pub size_variation_id: i32,
    pub quantity: i32,
    pub price: f64,
    pub discount_rate: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::orders::Entity",
        from = "Column::OrderId",
        to = "super::orders::Column::Id"
    )]
    Orders,
    #[sea_orm(
        belongs_to = "super::size_variations::Entity",
        from = "Column::SizeVariationId",
        to = "super::size_variations::Column::Id"
    )]
    SizeVariations,
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<super::size_variations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SizeVariations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
