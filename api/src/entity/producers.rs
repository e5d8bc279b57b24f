use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "producers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    /// Discriminator for the producer variant, e.g. `toy`
    pub kind: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::toys::Entity")]
    Toys,
}

impl Related<super::toys::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Toys.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
