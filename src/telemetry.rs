use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Builds the subscriber for the process. `RUST_LOG` overrides the
/// default filter. Diagnostics go to stderr so they never mix with the
/// reminder listing on stdout.
pub fn get_subscriber(default_env_filter: String) -> impl Subscriber + Send + Sync {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_env_filter));
    let fmt_layer = fmt::layer()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);
    Registry::default().with(env_filter).with(fmt_layer)
}

pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) {
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
}
