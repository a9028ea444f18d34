use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A named place a fundi advertises working around.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_area")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub fundi_id: Uuid,
    pub area_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::FundiId",
        to = "super::profile::Column::Id"
    )]
    Fundi,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fundi.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
