use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "color_variation_images")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub color_variation_id: i32,
    pub file_name: String,
    pub image: Vec<u8>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::color_variations::Entity",
        from = "Column::ColorVariationId",
        to = "super::color_variations::Column::Id"
    )]
    ColorVariations,
}

impl Related<super::color_variations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ColorVariations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
