use {
    crate::{
        api,
        auction,
        config::RunOptions,
        state::Store,
        user,
    },
    anyhow::anyhow,
    futures::future::join_all,
    sqlx::postgres::PgPoolOptions,
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

const DATABASE_MAX_CONNECTIONS: u32 = 10;

pub async fn start_server(run_options: RunOptions) -> anyhow::Result<()> {
    tokio::spawn(async move {
        tracing::info!("Registered shutdown signal handler...");
        tokio::signal::ctrl_c().await.unwrap();
        tracing::info!("Shut down signal received, waiting for tasks...");
        SHOULD_EXIT.store(true, Ordering::Release);
    });

    let pool = PgPoolOptions::new()
        .max_connections(DATABASE_MAX_CONNECTIONS)
        .connect(&run_options.server.database_url)
        .await
        .map_err(|err| anyhow!("Failed to connect to database: {:?}", err))?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|err| anyhow!("Failed to run database migrations: {:?}", err))?;

    let auction_service = auction::service::Service::new(
        pool.clone(),
        auction::service::Config {
            auction_lifetime: run_options.auction_lifetime(),
            sweep_interval:   run_options.sweep_interval(),
        },
    );
    let user_service = user::service::Service::new(pool);
    let store = Arc::new(Store {
        auction_service: auction_service.clone(),
        user_service,
    });

    let sweeper_loop = tokio::spawn(async move { auction_service.run_sweeper_loop().await });
    let server_loop = tokio::spawn(api::start_api(run_options, store));
    join_all(vec![sweeper_loop, server_loop]).await;
    Ok(())
}

// Exit flag polled by the sweeper loop and the HTTP server's graceful
// shutdown. The only piece of global state in the process.
pub(crate) static SHOULD_EXIT: AtomicBool = AtomicBool::new(false);
pub const EXIT_CHECK_INTERVAL: Duration = Duration::from_secs(1);
