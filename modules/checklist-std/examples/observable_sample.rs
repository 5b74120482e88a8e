//! Observable checklist driven by timed worker threads.
//!
//! One listener is registered up front and hears the transition when BIRD is set. A second one
//! joins after the checklist is complete and is notified on registration.

use std::{thread, time::Duration};

use checklist_std_rs::{CheckItem, ObservableChecklist, ReadyListener};
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Checks {
  Cat,
  Dog,
  Bird,
}

impl CheckItem for Checks {
  const ALL: &'static [Self] = &[Checks::Cat, Checks::Dog, Checks::Bird];
}

fn main() {
  let env_filter =
    tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
  let _ = FmtSubscriber::builder().with_env_filter(env_filter).try_init();

  tracing::info!("start");
  let checks: ObservableChecklist<Checks> = ObservableChecklist::for_items().expect("non-empty check set");
  let _subscription = checks.subscribe(ReadyListener::new(|| tracing::info!("ready!")));

  let schedule = [(1, Checks::Cat), (2, Checks::Cat), (3, Checks::Dog), (4, Checks::Bird)];
  let workers: Vec<_> = schedule
    .into_iter()
    .map(|(seconds, check)| {
      let checks = checks.clone();
      thread::spawn(move || {
        thread::sleep(Duration::from_secs(seconds));
        tracing::info!(?check, "setting");
        checks.check(&check).expect("check belongs to the set");
      })
    })
    .collect();
  tracing::info!("setup complete");

  for worker in workers {
    worker.join().expect("worker panicked");
  }

  checks.register_listener(&ReadyListener::new(|| tracing::info!("late observer caught up")));
}
