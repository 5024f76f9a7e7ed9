//! Shared test models, reducers and recording observers.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use unistate::{observer, Dispatcher, Handler, HandlerConfig, Observer, Reducer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    pub value: i64,
}

impl Counter {
    pub fn new(value: i64) -> Self {
        Self { value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterCommand {
    Increment,
    Decrement,
    Reset,
    /// Never recognized by the reducer.
    Unknown,
}

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type Model = Counter;
    type Command = CounterCommand;

    fn update(
        model: &Counter,
        dispatch: &Dispatcher<CounterCommand>,
        command: CounterCommand,
    ) -> Option<Counter> {
        counter_update(model, dispatch, command)
    }
}

pub fn counter_update(
    model: &Counter,
    _dispatch: &Dispatcher<CounterCommand>,
    command: CounterCommand,
) -> Option<Counter> {
    match command {
        CounterCommand::Increment => Some(Counter::new(model.value + 1)),
        CounterCommand::Decrement => Some(Counter::new(model.value - 1)),
        CounterCommand::Reset => Some(Counter::new(0)),
        CounterCommand::Unknown => None,
    }
}

pub fn counter_handler(initial: i64, config: HandlerConfig) -> Handler<Counter, CounterCommand> {
    unistate::logging::init_tracing();
    Handler::new(Counter::new(initial), counter_update, config).expect("handler construction")
}

/// Observer that records every delivered counter value.
pub fn recorder() -> (Observer<Counter>, Arc<Mutex<Vec<i64>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let callback = observer(move |model: &Counter| sink.lock().push(model.value));
    (callback, seen)
}

pub fn debounced(window_ms: u64) -> HandlerConfig {
    HandlerConfig::default().with_debounce(Duration::from_millis(window_ms))
}

/// Long enough for every queued command to fold and deliver with no debounce.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}

pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
