use anyhow::Context;
use std::path::Path;

pub fn run(root: &Path, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    // Data errors abort here, before the port is bound.
    let (config, dataset) = super::load(root)?;
    let host = host.unwrap_or(config.server.host);
    let port = port.unwrap_or(config.server.port);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("{host}:{port}"))
            .await
            .with_context(|| format!("failed to bind {host}:{port}"))?;
        flood_server::serve_on(dataset, listener).await
    })
}
