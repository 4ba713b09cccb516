use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "color_variations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_id: i32,
    pub color_id: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::products::Entity",
        from = "Column::ProductId",
        to = "super::products::Column::Id"
    )]
    Products,
    #[sea_orm(
        belongs_to = "super::colors::Entity",
        from = "Column::ColorId",
        to = "super::colors::Column::Id"
    )]
    Colors,
    #[sea_orm(has_many = "super::color_variation_images::Entity")]
    ColorVariationImages,
    #[sea_orm(has_many = "super::size_variations::Entity")]
    SizeVariations,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl Related<super::colors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Colors.def()
    }
}

impl Related<super::color_variation_images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ColorVariationImages.def()
    }
}

impl Related<super::size_variations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SizeVariations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
