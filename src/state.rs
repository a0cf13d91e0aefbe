use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(orm: DatabaseConnection) -> Self {
        Self { orm }
    }
}
