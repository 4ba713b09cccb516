use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "colors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub code: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::color_variations::Entity")]
    ColorVariations,
}

impl Related<super::color_variations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ColorVariations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
