use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sizes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub code: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::size_variations::Entity")]
    SizeVariations,
}

impl Related<super::size_variations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SizeVariations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
