//! Writing encoded documents somewhere, one item at a time.

use crate::encode::{DefaultEncoder, DocumentEncoder};
use crate::error::ExportError;
use crate::export::{Export, ExportTarget, Exporter};
use crate::filename::sanitize;
use folio_types::LessonPlan;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

/// Destination for encoded documents.
pub trait DeliverySink {
    /// Stores `bytes` under `filename` and returns where they went.
    fn deliver(&mut self, filename: &str, bytes: Vec<u8>) -> Result<PathBuf, ExportError>;
}

/// Writes files into a directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DeliverySink for DirectorySink {
    fn deliver(&mut self, filename: &str, bytes: Vec<u8>) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.dir).map_err(|source| ExportError::Delivery {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.dir.join(filename);
        fs::write(&path, bytes).map_err(|source| ExportError::Delivery {
            path: path.clone(),
            source,
        })?;
        log::info!("Wrote {}", path.display());
        Ok(path)
    }
}

/// Keeps delivered files in memory, in delivery order.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub files: Vec<(String, Vec<u8>)>,
}

impl MemorySink {
    pub fn names(&self) -> Vec<&str> {
        self.files.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl DeliverySink for MemorySink {
    fn deliver(&mut self, filename: &str, bytes: Vec<u8>) -> Result<PathBuf, ExportError> {
        self.files.push((filename.to_string(), bytes));
        Ok(PathBuf::from(filename))
    }
}

/// One plan of a repeated single-document export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportItem {
    pub plan: LessonPlan,
    /// Prefix for the filename, typically a learning-outcome code.
    pub slo_id: Option<String>,
}

impl ExportItem {
    pub fn new(plan: LessonPlan, slo_id: Option<String>) -> Self {
        Self { plan, slo_id }
    }
}

/// Outcome of one (item, target) delivery.
#[derive(Debug)]
pub struct ItemReport {
    /// Position of the item in the input, or of the target for a batch.
    pub index: usize,
    pub target: ExportTarget,
    /// Full filename, extension included.
    pub filename: String,
    pub result: Result<PathBuf, ExportError>,
}

impl ItemReport {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Encodes `export` with the default encoder for its tree and delivers it.
pub fn deliver_export<S>(
    exporter: &Exporter,
    export: &Export,
    sink: &mut S,
) -> Result<PathBuf, ExportError>
where
    S: DeliverySink + ?Sized,
{
    let encoder = DefaultEncoder::for_target(export.tree.target());
    let bytes = exporter.encode(export, &encoder)?;
    sink.deliver(&export.file_name_with(encoder.extension()), bytes)
}

/// Exports every item to every target, in input order, pausing `pacing`
/// between consecutive deliveries. A failed item is reported and the loop
/// moves on.
pub fn deliver_each<S>(
    exporter: &Exporter,
    items: &[ExportItem],
    targets: &[ExportTarget],
    sink: &mut S,
    pacing: Duration,
) -> Vec<ItemReport>
where
    S: DeliverySink + ?Sized,
{
    let mut reports = Vec::with_capacity(items.len() * targets.len());
    for (index, item) in items.iter().enumerate() {
        for &target in targets {
            if !reports.is_empty() && !pacing.is_zero() {
                thread::sleep(pacing);
            }
            let export = exporter.export(&item.plan, target, item.slo_id.as_deref());
            let filename = export.file_name_with(target.extension());
            let result = deliver_export(exporter, &export, sink);
            if let Err(e) = &result {
                log::warn!("Item {} ('{}') failed: {}", index, filename, e);
            }
            reports.push(ItemReport {
                index,
                target,
                filename,
                result,
            });
        }
    }
    let failed = reports.iter().filter(|r| !r.is_ok()).count();
    log::info!(
        "Delivered {} of {} document(s)",
        reports.len() - failed,
        reports.len()
    );
    reports
}

/// Exports `plans` as one batch document per target. Each target is an
/// independent item: a failed encode or write is reported and the remaining
/// targets are still attempted.
pub fn deliver_batch<S>(
    exporter: &Exporter,
    plans: &[LessonPlan],
    targets: &[ExportTarget],
    base_name: &str,
    sink: &mut S,
    pacing: Duration,
) -> Vec<ItemReport>
where
    S: DeliverySink + ?Sized,
{
    let mut reports = Vec::with_capacity(targets.len());
    for (index, &target) in targets.iter().enumerate() {
        if index > 0 && !pacing.is_zero() {
            thread::sleep(pacing);
        }
        let (filename, result) = match exporter.export_batch(plans, target, base_name) {
            Ok(export) => (
                export.file_name_with(target.extension()),
                deliver_export(exporter, &export, sink),
            ),
            Err(e) => (
                format!("{}.{}", sanitize(base_name, None), target.extension()),
                Err(e),
            ),
        };
        if let Err(e) = &result {
            log::warn!("Batch '{}' failed: {}", filename, e);
        }
        reports.push(ItemReport {
            index,
            target,
            filename,
            result,
        });
    }
    reports
}
