use anyhow::Result;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema,
};

use crate::{
    config::AppConfig,
    entity::{Characters, Favourites, Planets, Users, Vehicles},
};

/// Create a SeaORM connection sized from the application config.
pub async fn connect(config: &AppConfig) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(false);
    let conn = Database::connect(options).await?;
    Ok(conn)
}

/// Create every table from the entity definitions, skipping tables that exist.
///
/// Tables are created owners first so foreign keys always point at an
/// existing table.
pub async fn create_schema(conn: &DatabaseConnection) -> Result<()> {
    create_table(conn, Users).await?;
    create_table(conn, Vehicles).await?;
    create_table(conn, Planets).await?;
    create_table(conn, Characters).await?;
    create_table(conn, Favourites).await?;
    Ok(())
}

async fn create_table<E: EntityTrait>(conn: &DatabaseConnection, entity: E) -> Result<()> {
    let backend = conn.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    stmt.if_not_exists();
    conn.execute(backend.build(&stmt)).await?;
    tracing::debug!(table = %entity.table_name(), "table ensured");
    Ok(())
}
