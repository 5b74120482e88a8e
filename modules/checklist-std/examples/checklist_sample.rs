//! Checklist driven by timed worker threads.
//!
//! Four workers set CAT, CAT again, DOG and BIRD one second apart. The hook fires once, when BIRD
//! completes the checklist.

use std::{thread, time::Duration};

use checklist_std_rs::{CheckItem, Checklist};
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
  let checks: Checklist<Checks, _> = Checklist::for_items(|| tracing::info!("ready!")).expect("non-empty check set");

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
}
