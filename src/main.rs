use http_query_extensions::config::Config;
use http_query_extensions::{app, logging};
use lambda_http::{run, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;
    logging::init(&config);

    run(app()).await
}
