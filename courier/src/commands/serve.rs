use courier_config::Config;
use tracing::info;

use crate::environment::build_rest_server;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let server = build_rest_server(&config)?;
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
