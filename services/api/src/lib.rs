mod cli;
mod infra;
mod report;
mod routes;
mod server;

use artist_directory::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
