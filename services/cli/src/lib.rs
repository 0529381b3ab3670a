mod cli;
mod demo;
mod infra;
mod session;

use perf_rating::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
