use std::{
  io::Write,
  sync::{Arc, Mutex},
};

use checklist_std_rs::{ChecklistConfig, ObservableChecklist, ReadyListener};
use tracing::subscriber::with_default;
use tracing_subscriber::fmt;

struct CaptureWriter {
  buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for CaptureWriter {
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    let mut guard = self.buffer.lock().unwrap();
    guard.extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

fn capture<R>(f: impl FnOnce() -> R) -> (R, String) {
  let buffer: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
  let writer_source = buffer.clone();
  let subscriber = fmt::SubscriberBuilder::default()
    .with_max_level(tracing::Level::TRACE)
    .with_writer(move || CaptureWriter { buffer: writer_source.clone() })
    .with_ansi(false)
    .finish();

  let result = with_default(subscriber, f);
  let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
  (result, output)
}

#[test]
fn ready_transition_is_logged_with_label() {
  let checklist: ObservableChecklist<&str> =
    ObservableChecklist::new_with_config(["tls", "dns"], ChecklistConfig::new().with_label("edge-proxy")).unwrap();

  let (_, output) = capture(|| {
    checklist.register_listener(&ReadyListener::new(|| {}));
    checklist.check(&"tls").unwrap();
    checklist.check(&"dns").unwrap();
  });

  assert!(output.contains("listener registered"), "{output}");
  assert!(output.contains("checklist ready"), "{output}");
  assert!(output.contains("edge-proxy"), "{output}");
  assert_eq!(output.matches("checklist ready").count(), 1, "{output}");
}

#[test]
fn unknown_checks_do_not_log_state_changes() {
  let checklist: ObservableChecklist<&str> = ObservableChecklist::new(["tls"]).unwrap();

  let (result, output) = capture(|| checklist.check(&"disk"));

  assert!(result.is_err());
  assert!(!output.contains("check set"), "{output}");
}
