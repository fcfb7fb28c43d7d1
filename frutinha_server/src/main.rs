use axum::http::StatusCode;
use axum::{extract::State, routing::post, Json, Router};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use frutinha_core::{spin_once, EngineParams, SpinRng};
use frutinha_shared::{SpinRequest, SpinResponse};

struct AppState {
    db: SqlitePool,
    params: EngineParams,
}

// DB schema is defined in migrations (see migrations/ folder)

async fn get_balance(pool: &SqlitePool) -> anyhow::Result<i64> {
    let row: (i64,) = sqlx::query_as("SELECT balance FROM player WHERE id = 1")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

async fn set_balance(pool: &SqlitePool, balance: i64) -> anyhow::Result<()> {
    sqlx::query("UPDATE player SET balance = ? WHERE id = 1")
        .bind(balance)
        .execute(pool)
        .await?;
    Ok(())
}

async fn init_db(db: &SqlitePool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(db).await?;
    Ok(())
}

/// The form field travels verbatim; it becomes a bet here or not at all.
fn parse_bet(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|bet| *bet > 0)
}

async fn route_play(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SpinRequest>,
) -> Result<Json<SpinResponse>, StatusCode> {
    let bet_size = parse_bet(&req.bet_size).ok_or(StatusCode::BAD_REQUEST)?;

    let balance = get_balance(&state.db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let mut rng = SpinRng::from_entropy();
    let outcome = spin_once(&mut rng, &state.params, bet_size);
    let symbols_array: Vec<String> = outcome.symbols.iter().map(|s| s.name().to_string()).collect();
    let new_balance = balance - bet_size + outcome.payout;

    // log spin
    let symbols_json =
        serde_json::to_string(&symbols_array).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let ts = chrono::Utc::now().to_rfc3339();
    sqlx::query(
        "INSERT INTO spins (ts, bet_size, symbols_json, payout, balance_after) VALUES (?, ?, ?, ?, ?)"
    )
    .bind(ts)
    .bind(bet_size)
    .bind(symbols_json)
    .bind(outcome.payout)
    .bind(new_balance)
    .execute(&state.db)
    .await
    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    set_balance(&state.db, new_balance)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    info!(bet_size, payout = outcome.payout, balance = new_balance, "spin settled");

    Ok(Json(SpinResponse {
        all_symbols: state.params.machine.symbol_names(),
        symbols_array,
        balance: new_balance,
        payout: outcome.payout,
    }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let db = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(
            &std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://frutinha.db?mode=rwc".to_string()),
        )
        .await?;
    init_db(&db).await?;

    let state = Arc::new(AppState {
        db,
        params: EngineParams::classic_default(),
    });

    // Everything that is not the play endpoint is the built frontend:
    // index.html, the wasm bundle and the images/<symbol>.png assets.
    let static_dir =
        std::env::var("STATIC_DIR").unwrap_or_else(|_| "frutinha_wasm/dist".to_string());

    let app = Router::new()
        .route("/play", post(route_play))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let addr = std::env::var("BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bet_must_be_a_positive_integer() {
        assert_eq!(parse_bet("10"), Some(10));
        assert_eq!(parse_bet(" 10 "), Some(10));
        assert_eq!(parse_bet("0"), None);
        assert_eq!(parse_bet("-5"), None);
        assert_eq!(parse_bet("ten"), None);
        assert_eq!(parse_bet(""), None);
        assert_eq!(parse_bet("2.5"), None);
    }
}
