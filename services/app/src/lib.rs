mod cli;
mod demo;

use jobdeck::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
