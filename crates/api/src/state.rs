/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Holds the explicitly constructed storage handle; there is no process-wide
/// connection state. Cloning is cheap since the pool is reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: soundverse_db::DbPool,
}
