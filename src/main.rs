use bilo_session::prelude::*;

#[cfg(target_arch = "wasm32")]
fn main() -> BiloSessionResult<()> {
    Err(BiloSessionError::from("no main for wasm builds"))
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> BiloSessionResult<()> {
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{EnvFilter, Layer};

    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::DEBUG.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(non_blocking_writer)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).init();
    tracing::debug!("running bilo-session {}", full_version());

    let mut store = LocalStore::default_location()?;
    tracing::debug!("using data directory {}", store.data_dir().display());

    let session_id = get_session_id(&mut store)?;
    println!("{session_id}");

    Ok(())
}
