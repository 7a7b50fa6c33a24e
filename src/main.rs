use std::io;
use std::process::ExitCode;

use binance_price::{Binance, logger, report};

#[cfg(not(any(feature = "hyper", feature = "reqwest")))]
compile_error!("the binary needs either the `hyper` or the `reqwest` feature");

#[cfg(feature = "dotenvy")]
fn client() -> binance_price::Result<Binance> {
    Binance::from_env()
}

#[cfg(not(feature = "dotenvy"))]
fn client() -> binance_price::Result<Binance> {
    Ok(Binance::default())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logger::setup_logger();

    let client = match client() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let (mut out, mut err) = (io::stdout().lock(), io::stderr().lock());
    match report::run(&client, &mut out, &mut err).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("failed to write output: {e}");
            ExitCode::FAILURE
        }
    }
}
