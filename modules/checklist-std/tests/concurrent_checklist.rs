use std::{
  sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Barrier,
  },
  thread,
  time::Duration,
};

use checklist_std_rs::{CheckItem, Checklist, ChecklistError, ObservableChecklist, ReadyListener};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Animal {
  Cat,
  Dog,
  Bird,
}

impl CheckItem for Animal {
  const ALL: &'static [Self] = &[Animal::Cat, Animal::Dog, Animal::Bird];
}

#[test]
fn timed_workers_complete_the_checklist_once() {
  let fired = Arc::new(AtomicUsize::new(0));
  let counter = fired.clone();
  let checklist: Checklist<Animal, _> = Checklist::for_items(move || {
    counter.fetch_add(1, Ordering::SeqCst);
  })
  .unwrap();

  let schedule = [(1, Animal::Cat), (2, Animal::Cat), (3, Animal::Dog), (4, Animal::Bird)];
  let workers: Vec<_> = schedule
    .into_iter()
    .map(|(delay, animal)| {
      let checklist = checklist.clone();
      thread::spawn(move || {
        thread::sleep(Duration::from_millis(delay * 5));
        checklist.check(&animal).unwrap()
      })
    })
    .collect();
  let transitions: Vec<bool> = workers.into_iter().map(|worker| worker.join().unwrap()).collect();

  assert_eq!(transitions, vec![false, false, false, true]);
  assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[test]
fn every_completion_cycle_fires_once_under_contention() {
  const CYCLES: usize = 50;
  const KEYS: usize = 6;

  let fired = Arc::new(AtomicUsize::new(0));
  let counter = fired.clone();
  let keys: Vec<String> = (0..KEYS).map(|index| format!("key-{index}")).collect();
  let checklist: Checklist<String, _> = Checklist::new(keys.clone(), move || {
    counter.fetch_add(1, Ordering::SeqCst);
  })
  .unwrap();

  for cycle in 0..CYCLES {
    let barrier = Arc::new(Barrier::new(KEYS * 2));
    let handles: Vec<_> = keys
      .iter()
      .chain(keys.iter())
      .cloned()
      .map(|key| {
        let checklist = checklist.clone();
        let barrier = barrier.clone();
        thread::spawn(move || {
          barrier.wait();
          checklist.check(key.as_str()).unwrap()
        })
      })
      .collect();
    let transitions = handles.into_iter().map(|handle| handle.join().unwrap()).filter(|transitioned| *transitioned).count();

    assert_eq!(transitions, 1, "cycle {cycle}");
    assert_eq!(fired.load(Ordering::SeqCst), cycle + 1);
    checklist.reset();
    assert!(!checklist.is_ready());
  }
}

#[test]
fn uncheck_racing_check_never_double_fires() {
  let fired = Arc::new(AtomicUsize::new(0));
  let counter = fired.clone();
  let checklist: Checklist<u8, _> = Checklist::new([0, 1], move || {
    counter.fetch_add(1, Ordering::SeqCst);
  })
  .unwrap();
  checklist.check(&0).unwrap();

  let flips = Arc::new(AtomicUsize::new(0));
  thread::scope(|scope| {
    let toggler = checklist.clone();
    let checker = checklist.clone();
    let fired_transitions = flips.clone();
    scope.spawn(move || {
      for _ in 0..1_000 {
        toggler.uncheck(&1).unwrap();
      }
    });
    scope.spawn(move || {
      for _ in 0..1_000 {
        if checker.check(&1).unwrap() {
          fired_transitions.fetch_add(1, Ordering::SeqCst);
        }
      }
    });
  });

  assert_eq!(fired.load(Ordering::SeqCst), flips.load(Ordering::SeqCst));
}

#[test]
fn observable_notifies_all_listeners_across_threads() {
  let checklist: ObservableChecklist<Animal> = ObservableChecklist::for_items().unwrap();
  let calls: Vec<Arc<AtomicUsize>> = (0..4).map(|_| Arc::new(AtomicUsize::new(0))).collect();
  let _subscriptions: Vec<_> = calls
    .iter()
    .map(|count| {
      let count = count.clone();
      checklist.subscribe(ReadyListener::new(move || {
        count.fetch_add(1, Ordering::SeqCst);
      }))
    })
    .collect();

  thread::scope(|scope| {
    for animal in Animal::ALL {
      let checklist = checklist.clone();
      scope.spawn(move || checklist.check(animal).unwrap());
    }
  });

  for count in &calls {
    assert_eq!(count.load(Ordering::SeqCst), 1);
  }

  let late = Arc::new(AtomicUsize::new(0));
  let late_count = late.clone();
  checklist.register_listener(&ReadyListener::new(move || {
    late_count.fetch_add(1, Ordering::SeqCst);
  }));
  assert_eq!(late.load(Ordering::SeqCst), 1);
  for count in &calls {
    assert_eq!(count.load(Ordering::SeqCst), 1);
  }
}

#[test]
fn errors_leave_state_untouched() {
  let checklist: ObservableChecklist<&str> = ObservableChecklist::new(["a", "b"]).unwrap();
  checklist.check(&"a").unwrap();
  assert_eq!(checklist.check(&"z"), Err(ChecklistError::UnknownCheck("\"z\"".to_string())));
  assert_eq!(checklist.pending(), vec!["b"]);
  assert!(matches!(ObservableChecklist::<u8>::new([]), Err(ChecklistError::InvalidArgument(_))));
}
