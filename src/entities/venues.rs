use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "venues")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// `name` case-folded for search.
    pub search_name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::shows::Entity")]
    Shows,
    #[sea_orm(has_many = "super::venue_genres::Entity")]
    Genres,
}

impl Related<super::shows::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shows.def()
    }
}

impl Related<super::venue_genres::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Genres.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
