use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;

/// Join row linking one user to one vehicle, planet and character.
///
/// The four foreign keys together form the primary key, so a given
/// combination can be stored at most once.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favourites")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "usersFav_id")]
    pub users_fav_id: i32,
    #[sea_orm(primary_key, auto_increment = false, column_name = "vehiclesFav_id")]
    pub vehicles_fav_id: i32,
    #[sea_orm(primary_key, auto_increment = false, column_name = "planetsFav_id")]
    pub planets_fav_id: i32,
    #[sea_orm(primary_key, auto_increment = false, column_name = "charactersFav_id")]
    pub characters_fav_id: i32,
    pub date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UsersFavId",
        to = "super::users::Column::Id"
    )]
    Users,
    #[sea_orm(
        belongs_to = "super::vehicles::Entity",
        from = "Column::VehiclesFavId",
        to = "super::vehicles::Column::Id"
    )]
    Vehicles,
    #[sea_orm(
        belongs_to = "super::planets::Entity",
        from = "Column::PlanetsFavId",
        to = "super::planets::Column::Id"
    )]
    Planets,
    #[sea_orm(
        belongs_to = "super::characters::Entity",
        from = "Column::CharactersFavId",
        to = "super::characters::Column::Id"
    )]
    Characters,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::vehicles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicles.def()
    }
}

impl Related<super::planets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planets.def()
    }
}

impl Related<super::characters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Characters.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert && self.date.is_not_set() {
            self.date = Set(Utc::now().into());
        }
        Ok(self)
    }
}
