use hydro_display::clock::SystemClock;
use hydro_display::device::{DeviceProfile, InterfaceIdiom};
use hydro_display::encoded::EncodedConfig;
use hydro_display::events::ResolverEvent;
use hydro_display::net::HttpValidator;
use hydro_display::rating::ReviewHost;
use hydro_display::storage::{JsonPreferenceStore, Preferences};
use hydro_display::{DisplayMode, DisplayResolver, ResolverConfig, ResolverError, ResolverServices};
use std::sync::Arc;
use std::time::Duration;

struct LogReviewHost;

impl ReviewHost for LogReviewHost {
    fn request_review(&self) {
        log::info!("host: review dialog requested");
    }
}

#[tokio::main]
async fn main() -> Result<(), ResolverError> {
    env_logger::init();

    // usage: resolve [prefs.json] [phone|tablet]
    let mut args = std::env::args().skip(1);
    let prefs_path = args.next().unwrap_or_else(|| "hydro-prefs.json".into());
    let idiom = match args.next().as_deref() {
        Some("tablet") => InterfaceIdiom::Pad,
        _ => InterfaceIdiom::Phone,
    };

    let config = ResolverConfig::builder()
        .probe_timeout(Duration::from_secs(10))
        .build()
        .expect("Configuration is not valid");

    let store = JsonPreferenceStore::open(&prefs_path)
        .map_err(|e| ResolverError::Storage(e.to_string()))?;

    let services = ResolverServices {
        preferences: Preferences::new(Arc::new(store)),
        validator: Arc::new(HttpValidator::new(&config)?),
        device: Arc::new(DeviceProfile::new("demo", idiom)),
        clock: Arc::new(SystemClock),
        review_host: Arc::new(LogReviewHost),
        encoded: EncodedConfig::default(),
    };

    let resolver = DisplayResolver::new(Some(config), services);
    let mut event_rx = resolver.subscribe_events();
    let (handle, join_handle) = resolver.start();

    // Wait for the first decision, then give the rating timer a chance to fire.
    while let Ok(event) = event_rx.recv().await {
        println!("event: {:?}", event);
        if let ResolverEvent::ModeCommitted { mode, .. } = event {
            if mode == DisplayMode::Secondary {
                tokio::time::sleep(Duration::from_secs(3)).await;
            }
            break;
        }
    }

    let state = handle.state().await?;
    println!("final state: {:?}", state);

    handle.shutdown().await?;
    let _ = join_handle.await;
    Ok(())
}
