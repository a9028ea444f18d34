use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "profile_role")]
#[serde(rename_all = "lowercase")]
pub enum ProfileRole {
    #[sea_orm(string_value = "client")]
    Client,
    #[sea_orm(string_value = "pro")]
    Pro,
}

/// A marketplace member. Professionals carry an optional service area.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub full_name: String,
    pub role: ProfileRole,
    pub service_latitude: Option<f64>,
    pub service_longitude: Option<f64>,
    pub service_radius_km: Option<f64>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::job::Entity")]
    Jobs,
    #[sea_orm(has_many = "super::service_area::Entity")]
    ServiceAreas,
}

impl Related<super::job::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Jobs.def()
    }
}

impl Related<super::service_area::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceAreas.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
