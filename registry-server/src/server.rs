use {
    crate::{
        api,
        auction::{
            repository::AuctionTable,
            service::{
                Config,
                Service,
            },
        },
        config::RunOptions,
        kernel::clock::SystemClock,
        state::Store,
    },
    std::{
        sync::{
            atomic::{
                AtomicBool,
                Ordering,
            },
            Arc,
        },
        time::Duration,
    },
};

pub async fn start_server(run_options: RunOptions) -> anyhow::Result<()> {
    tokio::spawn(async move {
        tracing::info!("Registered shutdown signal handler...");
        tokio::signal::ctrl_c().await.unwrap();
        tracing::info!("Shut down signal received, waiting for tasks...");
        SHOULD_EXIT.store(true, Ordering::Release);
    });

    let auction_service = Service::new(
        AuctionTable::default(),
        Config {
            auction_window: Duration::from_secs(run_options.auction.auction_window_secs),
        },
        Arc::new(SystemClock),
    );
    let store = Arc::new(Store { auction_service });

    api::start_api(run_options, store).await
}

// A static exit flag to indicate to running tasks that we're shutting down.
// This is used to gracefully shut down the application.
pub(crate) static SHOULD_EXIT: AtomicBool = AtomicBool::new(false);
pub const EXIT_CHECK_INTERVAL: Duration = Duration::from_secs(1);
