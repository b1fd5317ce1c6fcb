use geo_capture::history::{ClickTarget, GENERIC_FAILURE_NOTICE, HistoryModal, HistoryTrigger};
use log::{Level, LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::sync::Once;

static CAPTURED: Mutex<Vec<(Level, String)>> = parking_lot::const_mutex(Vec::new());

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        CAPTURED.lock().push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

fn capture_logs() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger in this test binary");
        log::set_max_level(LevelFilter::Trace);
    });
}

fn errors_containing(needle: &str) -> Vec<String> {
    CAPTURED
        .lock()
        .iter()
        .filter(|(level, line)| *level == Level::Error && line.contains(needle))
        .map(|(_, line)| line.clone())
        .collect()
}

fn rows(modal: &HistoryModal) -> Vec<(String, String)> {
    modal
        .table()
        .expect("dialog is open")
        .rows
        .iter()
        .map(|row| (row.year.to_string(), row.value.to_string()))
        .collect()
}

#[test]
fn rows_render_newest_first() {
    let mut modal = HistoryModal::new();
    let trigger = HistoryTrigger::new(
        "Chuva",
        r#"["Ano","Valor"]"#,
        r#"[{"year":2020,"value":10},{"year":2021,"value":20}]"#,
    );

    assert!(modal.open(&trigger));

    let table = modal.table().unwrap();
    assert_eq!(table.headers, ["Ano".to_owned(), "Valor".to_owned()]);
    assert_eq!(table.title, "History: Chuva");
    assert_eq!(
        rows(&modal),
        [("2021".to_owned(), "20".to_owned()), ("2020".to_owned(), "10".to_owned())]
    );
}

#[test]
fn unparsable_history_is_logged_and_reported() {
    capture_logs();
    let mut modal = HistoryModal::new();
    let raw_history = "[{\"year\": 2020, \"value\": oops-unparsable";
    let trigger = HistoryTrigger::new("Broken", r#"["Ano","Valor"]"#, raw_history);

    assert!(!modal.open(&trigger));

    assert!(!modal.is_open());
    assert_eq!(modal.notice(), Some(GENERIC_FAILURE_NOTICE));
    let logged = errors_containing("oops-unparsable");
    assert_eq!(logged.len(), 1, "{logged:?}");
    assert!(logged[0].contains(r#"["Ano","Valor"]"#.replace('"', "\\\"").as_str()));
}

#[test]
fn malformed_headers_are_reported_too() {
    capture_logs();
    let mut modal = HistoryModal::new();
    let trigger = HistoryTrigger::new("Headers", "not-json-headers", "[]");

    assert!(!modal.open(&trigger));
    assert_eq!(modal.notice(), Some(GENERIC_FAILURE_NOTICE));
    assert_eq!(errors_containing("not-json-headers").len(), 1);

    modal.dismiss_notice();
    assert!(modal.notice().is_none());
}

#[test]
fn only_overlay_or_close_dismisses() {
    let mut modal = HistoryModal::new();
    let trigger = HistoryTrigger::new("Temp", r#"["Year","Temperature"]"#, r#"[{"year":2001,"value":"21.0 °C"}]"#);

    modal.open(&trigger);
    modal.on_click(ClickTarget::Panel);
    assert!(modal.is_open());
    modal.on_click(ClickTarget::Overlay);
    assert!(!modal.is_open());

    modal.open(&trigger);
    modal.close();
    assert!(!modal.is_open());
}
