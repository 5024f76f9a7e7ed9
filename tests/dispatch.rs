mod common;

use std::thread;
use std::time::Duration;

use common::{counter_handler, recorder, settle, CounterCommand};
use unistate::{Dispatcher, Handler, HandlerConfig, HandlerError};

#[tokio::test(start_paused = true)]
async fn dispatcher_reports_closed_after_handler_dropped() {
    let handler = counter_handler(0, HandlerConfig::default());
    let dispatcher = handler.dispatcher();
    assert!(dispatcher.try_send(CounterCommand::Increment).is_ok());
    assert!(!dispatcher.is_closed());

    drop(handler);
    settle().await;

    assert!(dispatcher.is_closed());
    assert!(matches!(
        dispatcher.try_send(CounterCommand::Increment),
        Err(HandlerError::Closed)
    ));
    // plain send swallows the closed handler
    dispatcher.send(CounterCommand::Increment);
}

#[tokio::test(start_paused = true)]
async fn drop_discards_pending_commands() {
    let handler = counter_handler(0, HandlerConfig::default());
    let (observer, seen) = recorder();
    handler.add_observer(observer);
    settle().await;

    handler.send(CounterCommand::Increment);
    drop(handler);
    settle().await;

    assert_eq!(*seen.lock(), vec![0]);
}

type Trace = Vec<(usize, usize)>;

fn append(
    trace: &Trace,
    _dispatch: &Dispatcher<(usize, usize)>,
    entry: (usize, usize),
) -> Option<Trace> {
    let mut next = trace.clone();
    next.push(entry);
    Some(next)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn senders_on_other_threads_are_serialized() -> anyhow::Result<()> {
    const THREADS: usize = 4;
    const PER_THREAD: usize = 50;

    let handler: Handler<Trace, (usize, usize)> =
        Handler::new(Vec::new(), append, HandlerConfig::default())?;

    let senders: Vec<_> = (0..THREADS)
        .map(|id| {
            let dispatcher = handler.dispatcher();
            thread::spawn(move || {
                for seq in 0..PER_THREAD {
                    dispatcher.send((id, seq));
                }
            })
        })
        .collect();
    for sender in senders {
        sender.join().expect("sender thread panicked");
    }

    let mut waited = Duration::ZERO;
    while handler.model().len() < THREADS * PER_THREAD && waited < Duration::from_secs(5) {
        tokio::time::sleep(Duration::from_millis(10)).await;
        waited += Duration::from_millis(10);
    }

    let trace = handler.model();
    assert_eq!(trace.len(), THREADS * PER_THREAD);
    for id in 0..THREADS {
        let seqs: Vec<usize> = trace
            .iter()
            .filter(|(sender, _)| *sender == id)
            .map(|(_, seq)| *seq)
            .collect();
        assert_eq!(seqs, (0..PER_THREAD).collect::<Vec<_>>());
    }
    Ok(())
}
