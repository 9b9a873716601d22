mod common;

use common::TestResult;
use common::fixtures::*;
use folio::{
    DeliverySink, DirectorySink, ExportError, ExportItem, ExportTarget, Exporter, MemorySink,
    deliver_batch, deliver_each, deliver_export,
};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Refuses any file whose name contains `reject`.
struct PickySink {
    reject: &'static str,
    inner: MemorySink,
}

impl DeliverySink for PickySink {
    fn deliver(&mut self, filename: &str, bytes: Vec<u8>) -> Result<PathBuf, ExportError> {
        if filename.contains(self.reject) {
            return Err(ExportError::Io(std::io::Error::other("disk full")));
        }
        self.inner.deliver(filename, bytes)
    }
}

fn items() -> Vec<ExportItem> {
    vec![
        ExportItem::new(sample_plan("Alpha"), Some("S1".to_string())),
        ExportItem::new(sample_plan("Beta"), Some("S2".to_string())),
        ExportItem::new(sample_plan("Gamma"), None),
    ]
}

#[test]
fn test_directory_sink_writes_every_document() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir()?;
    let mut sink = DirectorySink::new(dir.path());
    let reports = deliver_each(
        &Exporter::default(),
        &items(),
        &ExportTarget::ALL,
        &mut sink,
        Duration::ZERO,
    );

    assert_eq!(reports.len(), 6);
    assert!(reports.iter().all(|r| r.is_ok()));
    for name in [
        "S1_Alpha.docx",
        "S1_Alpha.pdf",
        "S2_Beta.docx",
        "S2_Beta.pdf",
        "Gamma.docx",
        "Gamma.pdf",
    ] {
        let bytes = std::fs::read(dir.path().join(name))?;
        assert!(!bytes.is_empty(), "{name} is empty");
    }
    let pdf = std::fs::read(dir.path().join("Gamma.pdf"))?;
    assert!(pdf.starts_with(b"%PDF"));
    let docx = std::fs::read(dir.path().join("Gamma.docx"))?;
    assert!(docx.starts_with(b"PK"));
    Ok(())
}

#[test]
fn test_failed_item_does_not_abort_the_rest() {
    let mut sink = PickySink {
        reject: "Beta",
        inner: MemorySink::default(),
    };
    let reports = deliver_each(
        &Exporter::default(),
        &items(),
        &ExportTarget::ALL,
        &mut sink,
        Duration::ZERO,
    );

    let failed: Vec<(usize, &str)> = reports
        .iter()
        .filter(|r| !r.is_ok())
        .map(|r| (r.index, r.filename.as_str()))
        .collect();
    assert_eq!(failed, vec![(1, "S2_Beta.docx"), (1, "S2_Beta.pdf")]);
    assert_eq!(
        sink.inner.names(),
        vec!["S1_Alpha.docx", "S1_Alpha.pdf", "Gamma.docx", "Gamma.pdf"]
    );
}

#[test]
fn test_pacing_spaces_out_deliveries() {
    let mut sink = MemorySink::default();
    let started = Instant::now();
    let reports = deliver_each(
        &Exporter::default(),
        &items()[..2],
        &[ExportTarget::Page],
        &mut sink,
        Duration::from_millis(30),
    );
    assert_eq!(reports.len(), 2);
    // One pause between two deliveries, none before the first.
    assert!(started.elapsed() >= Duration::from_millis(30));
}

#[test]
fn test_batch_delivery_uses_base_name() -> TestResult {
    let exporter = Exporter::default();
    let mut sink = MemorySink::default();
    let plans = [sample_plan("One"), sample_plan("Two")];
    for target in ExportTarget::ALL {
        let export = exporter.export_batch(&plans, target, "Unit 2: Fractions")?;
        deliver_export(&exporter, &export, &mut sink)?;
    }
    assert_eq!(
        sink.names(),
        vec!["Unit_2__Fractions.docx", "Unit_2__Fractions.pdf"]
    );
    Ok(())
}

#[test]
fn test_failed_batch_target_does_not_abort_the_other() {
    let mut sink = PickySink {
        reject: ".docx",
        inner: MemorySink::default(),
    };
    let plans = [sample_plan("One"), sample_plan("Two")];
    let reports = deliver_batch(
        &Exporter::default(),
        &plans,
        &ExportTarget::ALL,
        "Unit 3",
        &mut sink,
        Duration::ZERO,
    );

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].target, ExportTarget::Flow);
    assert_eq!(reports[0].filename, "Unit_3.docx");
    assert!(!reports[0].is_ok());
    assert!(reports[1].is_ok());
    assert_eq!(sink.inner.names(), vec!["Unit_3.pdf"]);
}

#[test]
fn test_empty_batch_is_reported_per_target() {
    let mut sink = MemorySink::default();
    let reports = deliver_batch(
        &Exporter::default(),
        &[],
        &ExportTarget::ALL,
        "Nothing",
        &mut sink,
        Duration::ZERO,
    );

    assert_eq!(reports.len(), 2);
    assert!(
        reports
            .iter()
            .all(|r| matches!(r.result, Err(ExportError::EmptyBatch)))
    );
    assert_eq!(reports[1].filename, "Nothing.pdf");
    assert!(sink.files.is_empty());
}
