//! Trading facade against a registry of paper-traded applications

use hive_app::{
    AppConfig, AppRegistry, Application, CURRENT_APP, Capability, Error, cancel_order, query,
    send_order, subscribe,
};
use hive_core::{
    CancelRequest, Event, EventData, EventKind, Exchange, OrderRequest, OrderRequestBuilder,
    Status,
};
use hive_gateway::{
    ChannelPublisher, ChannelSubscriber, GatewayError, PaperConfig, PaperGateway, Subscriber,
};
use rust_decimal_macros::dec;
use std::sync::Arc;

struct Harness {
    registry: AppRegistry,
    gateway: Arc<PaperGateway>,
    events: ChannelSubscriber<Event>,
}

type Built = (Arc<Application>, Arc<PaperGateway>, ChannelSubscriber<Event>);

fn build_app(name: &str, config: AppConfig) -> Built {
    let (publisher, events) = ChannelPublisher::pair(64);
    let gateway = Arc::new(PaperGateway::new(PaperConfig::default(), publisher));
    let app = Application::builder(name)
        .config(config)
        .trader(gateway.clone())
        .market(gateway.clone())
        .build()
        .unwrap();
    (app, gateway, events)
}

fn harness(config: AppConfig) -> Harness {
    let _ = env_logger::try_init();
    let registry = AppRegistry::new();
    let (app, gateway, events) = build_app("main", config);
    registry.register(app).unwrap();
    Harness {
        registry,
        gateway,
        events,
    }
}

fn rebar() -> OrderRequest {
    OrderRequestBuilder::by_str("rb2010", "SHFE", "long", "open", "limit", dec!(1), dec!(3500))
        .unwrap()
}

fn drain(events: &mut ChannelSubscriber<Event>) -> Vec<Event> {
    let mut out = Vec::new();
    while let Some(event) = events.try_next().unwrap() {
        out.push(event);
    }
    out
}

#[test]
fn test_trading_disabled_blocks_every_trading_call() {
    let mut h = harness(AppConfig {
        td_func: false,
        md_func: true,
        ..Default::default()
    });
    let mut sent = h.registry.monitors().send.subscribe();

    let err = send_order(&h.registry, &rebar(), CURRENT_APP).unwrap_err();
    assert!(matches!(err, Error::CapabilityDisabled(Capability::Trading)));

    let cancel = CancelRequest::new("42", "rb2010", Exchange::Shfe);
    assert!(matches!(
        cancel_order(&h.registry, &cancel, CURRENT_APP),
        Err(Error::CapabilityDisabled(Capability::Trading))
    ));
    assert!(matches!(
        query(&h.registry, "account", CURRENT_APP),
        Err(Error::CapabilityDisabled(Capability::Trading))
    ));

    // Nothing reached the interface or the monitors
    assert!(h.gateway.orders().is_empty());
    assert!(drain(&mut h.events).is_empty());
    assert!(sent.try_next().unwrap().is_none());
}

#[test]
fn test_market_disabled_blocks_subscribe() {
    let h = harness(AppConfig {
        td_func: true,
        md_func: false,
        ..Default::default()
    });

    assert!(matches!(
        subscribe(&h.registry, "rb2010.SHFE", CURRENT_APP),
        Err(Error::CapabilityDisabled(Capability::Market))
    ));
    assert!(h.gateway.subscriptions().is_empty());
}

#[test]
fn test_send_order_reaches_interface_and_monitor() {
    let mut h = harness(AppConfig::enabled());
    let mut sent = h.registry.monitors().send.subscribe();

    let request = rebar();
    let order_id = send_order(&h.registry, &request, CURRENT_APP).unwrap();

    let order = h.gateway.order(&order_id).unwrap();
    assert_eq!(order.status, Status::NotTraded);
    assert_eq!(order.local_symbol(), "rb2010.SHFE");
    assert_eq!(order.volume, dec!(1));
    assert_eq!(order.price, dec!(3500));

    assert_eq!(sent.try_next().unwrap(), Some(request));

    let statuses: Vec<Status> = drain(&mut h.events)
        .into_iter()
        .map(|e| match e.into_data() {
            EventData::Order(order) => order.status,
            other => panic!("unexpected {:?}", other.kind()),
        })
        .collect();
    assert_eq!(statuses, vec![Status::Submitting, Status::NotTraded]);
}

#[test]
fn test_cancel_order_reaches_interface_and_monitor() {
    let mut h = harness(AppConfig::enabled());
    let mut cancelled = h.registry.monitors().cancel.subscribe();

    let order_id = send_order(&h.registry, &rebar(), CURRENT_APP).unwrap();
    let request = h.gateway.order(&order_id).unwrap().cancel_request();
    drain(&mut h.events);

    cancel_order(&h.registry, &request, CURRENT_APP).unwrap();
    assert_eq!(h.gateway.order(&order_id).unwrap().status, Status::Cancelled);
    assert_eq!(cancelled.try_next().unwrap(), Some(request.clone()));

    // A second cancel is rejected by the interface, not by the gate
    assert!(matches!(
        cancel_order(&h.registry, &request, CURRENT_APP),
        Err(Error::Gateway(GatewayError::Rejected(_)))
    ));
}

#[test]
fn test_subscribe_when_enabled() {
    let h = harness(AppConfig::enabled());
    subscribe(&h.registry, "rb2010.SHFE", CURRENT_APP).unwrap();
    subscribe(&h.registry, "IF2009.CFFEX", "main").unwrap();
    assert_eq!(h.gateway.subscriptions(), vec!["IF2009.CFFEX", "rb2010.SHFE"]);
}

#[test]
fn test_query_account_publishes_funds() {
    let mut h = harness(AppConfig::enabled());
    send_order(&h.registry, &rebar(), CURRENT_APP).unwrap();
    drain(&mut h.events);

    query(&h.registry, "account", CURRENT_APP).unwrap();
    let events = drain(&mut h.events);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind(), EventKind::Account);
    match events[0].data() {
        EventData::Account(account) => {
            assert_eq!(account.frozen, dec!(3500));
            assert_eq!(account.available(), account.balance - dec!(3500));
        }
        other => panic!("unexpected {:?}", other.kind()),
    }
}

#[test]
fn test_unknown_query_kind() {
    let mut h = harness(AppConfig::enabled());
    assert!(matches!(
        query(&h.registry, "orders", CURRENT_APP),
        Err(Error::UnknownQuery(kind)) if kind == "orders"
    ));
    assert!(drain(&mut h.events).is_empty());
}

#[test]
fn test_disconnected_interface_error_is_surfaced() {
    let h = harness(AppConfig::enabled());
    h.gateway.set_connected(false);
    assert!(matches!(
        send_order(&h.registry, &rebar(), CURRENT_APP),
        Err(Error::Gateway(GatewayError::NotConnected))
    ));
}

#[test]
fn test_named_target_routes_to_that_instance() {
    let mut h = harness(AppConfig::enabled());
    let (other, other_gateway, mut other_events) = build_app("other", AppConfig::enabled());
    h.registry.register(other).unwrap();

    let order_id = send_order(&h.registry, &rebar(), "other").unwrap();
    assert!(other_gateway.order(&order_id).is_some());
    assert!(h.gateway.orders().is_empty());
    assert_eq!(drain(&mut other_events).len(), 2);
    assert!(drain(&mut h.events).is_empty());

    // Current follows set_current
    h.registry.set_current("other").unwrap();
    send_order(&h.registry, &rebar(), CURRENT_APP).unwrap();
    assert_eq!(other_gateway.orders().len(), 2);
}

#[test]
fn test_unknown_target() {
    let h = harness(AppConfig::enabled());
    assert!(matches!(
        send_order(&h.registry, &rebar(), "ghost"),
        Err(Error::UnknownApplication(name)) if name == "ghost"
    ));
    assert!(h.gateway.orders().is_empty());
}

#[test]
fn test_no_current_application() {
    let registry = AppRegistry::new();
    assert!(matches!(
        send_order(&registry, &rebar(), CURRENT_APP),
        Err(Error::NoCurrentContext)
    ));
}
