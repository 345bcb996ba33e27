use hive_app::{
    AppConfig, CURRENT_APP, EventDispatcher, cancel_order, init_app, load_config, query,
    send_order, subscribe,
};
use hive_core::{Event, OrderRequestBuilder, TickData};
use hive_runner::{SessionMonitor, bootstrap};
use rust_decimal_macros::dec;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;

fn print_help() {
    eprintln!(
        r#"Hive Runner - paper trading session

USAGE:
    hive-runner [OPTIONS]

OPTIONS:
    --config <PATH>     Load application configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    HIVE_TD_FUNC        Override TD_FUNC (true/false)
    HIVE_MD_FUNC        Override MD_FUNC (true/false)
    RUST_LOG            Log level filter (default: info)

EXAMPLES:
    # Run with trading and market data enabled
    hive-runner

    # Run with a config file, trading switched off
    HIVE_TD_FUNC=false hive-runner --config app.json
"#
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            load_config(&path)?
        }
        None => AppConfig::enabled(),
    }
    .with_env_overrides()?;

    let session = bootstrap("main", config)?;
    let monitor = Arc::new(SessionMonitor::new("session"));
    init_app(&monitor, &session.app);

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let dispatcher = EventDispatcher::new(session.app.clone());
    let dispatch = tokio::spawn(dispatcher.run_until(session.publisher.subscribe(), async {
        let _ = stop_rx.await;
    }));

    let registry = &session.registry;
    if let Err(e) = subscribe(registry, "rb2010.SHFE", CURRENT_APP) {
        log::warn!("Subscribe skipped: {}", e);
    }

    // One tick inside the day session, one after the close
    for (h, m, price) in [(9, 30, dec!(3500)), (15, 30, dec!(3512))] {
        let at = chrono::Local::now()
            .date_naive()
            .and_hms_opt(h, m, 0)
            .ok_or("invalid tick time")?;
        session.publish(Event::new(TickData::new(
            "rb2010",
            hive_core::Exchange::Shfe,
            at,
            price,
        )));
    }

    let request =
        OrderRequestBuilder::by_str("rb2010", "SHFE", "long", "open", "limit", dec!(1), dec!(3500))?;
    match send_order(registry, &request, CURRENT_APP) {
        Ok(order_id) => {
            log::info!("Order {} sent", order_id);
            query(registry, "account", CURRENT_APP)?;
            if let Some(order) = session.gateway.order(&order_id) {
                cancel_order(registry, &order.cancel_request(), CURRENT_APP)?;
            }
            query(registry, "position", CURRENT_APP)?;
        }
        Err(e) => log::warn!("Trading skipped: {}", e),
    }

    tokio::time::sleep(Duration::from_millis(200)).await;
    let _ = stop_tx.send(());
    let stats = dispatch.await?;

    println!(
        "events: {} (dropped {}, overflowed {}), deliveries: {}, failures: {}, ticks in session: {}, off session: {}",
        stats.events,
        stats.dropped,
        stats.overflowed,
        stats.deliveries,
        stats.failures,
        monitor.in_session(),
        monitor.off_session()
    );
    Ok(())
}
