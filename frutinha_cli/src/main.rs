use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use sqlx::{sqlite::SqlitePoolOptions, Row, SqlitePool};

use frutinha_shared::SpinLogEntry;

#[derive(Parser)]
#[command(name = "frutinha-cli", about = "Admin CLI for the frutinha server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Database URL, default sqlite://frutinha.db
    #[arg(long, value_parser, env = "DATABASE_URL")]
    database_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current balance
    Balance,
    /// Overwrite the balance
    SetBalance { amount: i64 },
    /// View last N log entries
    ViewLogs {
        #[arg(default_value_t = 20)]
        n: i64,
    },
    /// Export spins to CSV path
    ExportCsv { path: String },
}

async fn get_pool(url: Option<String>) -> anyhow::Result<SqlitePool> {
    let url = url.unwrap_or_else(|| "sqlite://frutinha.db".into());
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await?;
    Ok(pool)
}

fn entry_from_row(row: &sqlx::sqlite::SqliteRow) -> anyhow::Result<SpinLogEntry> {
    let ts: String = row.get("ts");
    let symbols_json: String = row.get("symbols_json");
    Ok(SpinLogEntry {
        id: row.get("id"),
        ts: DateTime::parse_from_rfc3339(&ts)?.with_timezone(&Utc),
        bet_size: row.get("bet_size"),
        symbols: serde_json::from_str(&symbols_json)?,
        payout: row.get("payout"),
        balance_after: row.get("balance_after"),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let pool = get_pool(cli.database_url).await?;

    match cli.command {
        Commands::Balance => {
            let row: (i64,) = sqlx::query_as("SELECT balance FROM player WHERE id = 1")
                .fetch_one(&pool)
                .await?;
            println!("{}", row.0);
        }
        Commands::SetBalance { amount } => {
            sqlx::query("UPDATE player SET balance = ? WHERE id = 1")
                .bind(amount)
                .execute(&pool)
                .await?;
            println!("Balance set to {amount}");
        }
        Commands::ViewLogs { n } => {
            let rows = sqlx::query(
                "SELECT id, ts, bet_size, symbols_json, payout, balance_after FROM spins ORDER BY id DESC LIMIT ?"
            )
            .bind(n)
            .fetch_all(&pool).await?;
            for row in &rows {
                let e = entry_from_row(row)?;
                println!(
                    "#{:>6} {} bet={} line={} payout={} balance={}",
                    e.id,
                    e.ts.to_rfc3339(),
                    e.bet_size,
                    e.symbols.join("/"),
                    e.payout,
                    e.balance_after
                );
            }
        }
        Commands::ExportCsv { path } => {
            let mut wtr = csv::Writer::from_path(&path)?;
            wtr.write_record(["id", "ts", "bet_size", "symbols", "payout", "balance_after"])?;
            let rows = sqlx::query(
                "SELECT id, ts, bet_size, symbols_json, payout, balance_after FROM spins ORDER BY id ASC"
            )
            .fetch_all(&pool).await?;
            let total = rows.len();
            for row in &rows {
                let e = entry_from_row(row)?;
                wtr.write_record(&[
                    e.id.to_string(),
                    e.ts.to_rfc3339(),
                    e.bet_size.to_string(),
                    e.symbols.join("/"),
                    e.payout.to_string(),
                    e.balance_after.to_string(),
                ])?;
            }
            wtr.flush()?;
            println!("Exported {} rows to {}", total, path);
        }
    }

    Ok(())
}
