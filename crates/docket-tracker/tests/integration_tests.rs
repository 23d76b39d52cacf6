//! End-to-end pipeline tests with in-memory collaborators

use chrono::NaiveDate;
use docket_classifier::{LexicalClassifier, ReasoningClassifier};
use docket_collector::SourceCollector;
use docket_domain::traits::{AnnouncementSource, FetchedPage, PageFetcher};
use docket_domain::{DocumentKind, MeetingType, RawAnnouncement};
use docket_llm::MockProvider;
use docket_tracker::{DocketTracker, RecordFilter, SearchField, TrackerConfig, TrackerError};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

struct ListingSource {
    announcements: Vec<RawAnnouncement>,
    calls: Rc<Cell<usize>>,
}

impl AnnouncementSource for ListingSource {
    fn collect(&self, _pages: usize) -> Vec<RawAnnouncement> {
        self.calls.set(self.calls.get() + 1);
        self.announcements.clone()
    }
}

fn announcement(title: &str, day: u32) -> RawAnnouncement {
    RawAnnouncement {
        title: title.to_string(),
        url: Some(format!("https://example.org/noticia/{}", day)),
        publication_date: NaiveDate::from_ymd_opt(2024, 5, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
        raw_body: String::new(),
    }
}

fn listing() -> Vec<RawAnnouncement> {
    vec![
        announcement(
            "Pauta da 15ª Reunião Ordinária de 14/05/2024: 48500.000001/2024-11 Assunto: Reajuste da tarifa anual.",
            10,
        ),
        announcement(
            "Ata da Reunião Extraordinária nº 3 de 02/05/2024: 48500.000777/2024-01 Assunto: Outorga de usina solar fotovoltaica.",
            3,
        ),
        announcement("Circuito Deliberativo nº 8", 20),
    ]
}

fn source(calls: &Rc<Cell<usize>>) -> Box<ListingSource> {
    Box::new(ListingSource {
        announcements: listing(),
        calls: calls.clone(),
    })
}

fn lexical_tracker(config: TrackerConfig) -> (DocketTracker, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let tracker =
        DocketTracker::with_parts(source(&calls), Box::new(LexicalClassifier::new()), config)
            .unwrap();
    (tracker, calls)
}

#[test]
fn test_update_builds_documents() {
    let (mut tracker, _) = lexical_tracker(TrackerConfig::default());
    assert_eq!(tracker.update(1), 3);

    let agenda = tracker.document(DocumentKind::Agenda, "15").unwrap();
    assert_eq!(agenda.date.date(), NaiveDate::from_ymd_opt(2024, 5, 14).unwrap());
    assert_eq!(agenda.records.len(), 1);
    assert_eq!(agenda.records[0].category, "Tarifas e Preços");

    let minutes = tracker.document(DocumentKind::Minutes, "3").unwrap();
    assert_eq!(minutes.meeting_type, MeetingType::Extraordinary);
    assert_eq!(minutes.records[0].number, "48500.000777/2024-01");

    let circuit = tracker.document(DocumentKind::Minutes, "8").unwrap();
    assert_eq!(circuit.meeting_type, MeetingType::DeliberativeCircuit);
    assert!(circuit.records.is_empty());
}

#[test]
fn test_store_grows_monotonically() {
    let (mut tracker, calls) = lexical_tracker(TrackerConfig::default());

    let mut previous = 0;
    for _ in 0..3 {
        let total = tracker.update(1);
        assert!(total > previous);
        previous = total;
    }
    assert_eq!(previous, 9);
    assert_eq!(calls.get(), 3);
}

#[test]
fn test_queries_over_pipeline_output() {
    let (mut tracker, _) = lexical_tracker(TrackerConfig::default());
    tracker.update(1);

    let agendas = tracker.documents(Some(DocumentKind::Agenda), None, None);
    assert_eq!(agendas.len(), 1);

    let hits = tracker.records(&RecordFilter::default().category("tarifas"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].document.meeting_number, "15");

    let hits = tracker.search("48500.000777", Some(SearchField::Number)).unwrap();
    assert_eq!(hits.len(), 1);
    assert!(matches!(tracker.search("", None), Err(TrackerError::InvalidQuery(_))));

    let stats = tracker.statistics();
    assert_eq!(stats.total_documents, 3);
    assert_eq!(stats.total_agendas, 1);
    assert_eq!(stats.total_minutes, 2);
    assert_eq!(stats.total_records, 2);

    let report = tracker.report(NaiveDate::from_ymd_opt(2024, 5, 10), None, None);
    assert_eq!(report.totals.agendas, 1);
}

#[test]
fn test_reasoning_classifier_in_pipeline() {
    let provider = MockProvider::new(
        r#"{"macrotema": "geracao", "subtemas": ["Solar"], "descricao": "Outorga solar"}"#,
    );
    let calls = Rc::new(Cell::new(0));
    let mut tracker = DocketTracker::with_parts(
        source(&calls),
        Box::new(ReasoningClassifier::new(provider.clone(), 1500)),
        TrackerConfig::default(),
    )
    .unwrap();

    tracker.update(1);
    assert_eq!(tracker.strategy(), "reasoning");
    assert_eq!(provider.call_count(), 2);

    let groups = tracker.records_by_category(None);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups["Geração de Energia"].len(), 2);
    assert_eq!(
        groups["Geração de Energia"][0].description.as_deref(),
        Some("Outorga solar")
    );
}

#[test]
fn test_failing_reasoning_service_falls_back() {
    let calls = Rc::new(Cell::new(0));
    let mut tracker = DocketTracker::with_parts(
        source(&calls),
        Box::new(ReasoningClassifier::new(MockProvider::failing("offline"), 1500)),
        TrackerConfig::default(),
    )
    .unwrap();

    tracker.update(1);
    let hits = tracker.records(&RecordFilter::default().category("tarifas"));
    assert_eq!(hits.len(), 1);
}

#[test]
fn test_refresh_then_restore() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aneel_data.json");
    let config = TrackerConfig::default().with_snapshot_path(&path);

    let (mut first, _) = lexical_tracker(config.clone());
    assert_eq!(first.refresh(1).unwrap(), 3);
    assert!(path.exists());

    let (mut second, calls) = lexical_tracker(config);
    assert_eq!(second.ensure_loaded(), 3);
    assert_eq!(calls.get(), 0);
    assert_eq!(second.all_documents(), first.all_documents());
}

#[test]
fn test_ensure_loaded_collects_without_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let config = TrackerConfig::default().with_snapshot_path(dir.path().join("absent.json"));

    let (mut tracker, calls) = lexical_tracker(config);
    assert_eq!(tracker.ensure_loaded(), 3);
    assert_eq!(tracker.ensure_loaded(), 3);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_corrupt_snapshot_triggers_collection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aneel_data.json");
    std::fs::write(&path, "not json").unwrap();

    let (mut tracker, calls) = lexical_tracker(TrackerConfig::default().with_snapshot_path(&path));
    assert_eq!(tracker.ensure_loaded(), 3);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_load_snapshot_appends() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aneel_data.json");

    let (mut tracker, _) = lexical_tracker(TrackerConfig::default());
    tracker.update(1);
    tracker.save_snapshot(&path).unwrap();

    assert_eq!(tracker.load_snapshot(&path).unwrap(), 3);
    assert_eq!(tracker.all_documents().len(), 6);
}

#[test]
fn test_refresh_to_unwritable_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("aneel_data.json");

    let (mut tracker, _) = lexical_tracker(TrackerConfig::default().with_snapshot_path(path));
    assert!(matches!(tracker.refresh(1), Err(TrackerError::Config(_))));
    assert_eq!(tracker.all_documents().len(), 3);
}

#[test]
fn test_invalid_config_rejected() {
    let calls = Rc::new(Cell::new(0));
    let config = TrackerConfig {
        initial_pages: 0,
        ..TrackerConfig::default()
    };
    let result =
        DocketTracker::with_parts(source(&calls), Box::new(LexicalClassifier::new()), config);
    assert!(matches!(result, Err(TrackerError::Config(_))));
}

/// Serves one listing page encoded as ISO-8859-1
struct Latin1Listing;

impl PageFetcher for Latin1Listing {
    type Error = String;

    fn fetch(&self, url: &str, _timeout: Duration) -> Result<FetchedPage, Self::Error> {
        if !url.ends_with("&pagina=0") {
            return Err(format!("no page at {}", url));
        }
        let html = r#"<html><head><meta charset="iso-8859-1"></head><body>
            <div class="noticia-item"><h3 class="titulo">Ata da Reunião Extraordinária nº 4</h3></div>
            </body></html>"#;
        // Every character here is in Latin-1, so its code point is its byte
        Ok(FetchedPage::new(html.chars().map(|c| c as u8).collect::<Vec<u8>>()))
    }
}

#[test]
fn test_latin1_listing_through_pipeline() {
    let collector =
        SourceCollector::with_fetcher(Latin1Listing, TrackerConfig::default().collector).unwrap();
    let mut tracker = DocketTracker::with_parts(
        Box::new(collector),
        Box::new(LexicalClassifier::new()),
        TrackerConfig::default(),
    )
    .unwrap();

    assert_eq!(tracker.update(1), 1);
    let minutes = tracker.document(DocumentKind::Minutes, "4").unwrap();
    assert_eq!(minutes.meeting_type, MeetingType::Extraordinary);
}
