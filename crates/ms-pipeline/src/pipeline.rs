//! The pipeline runner.

use crate::Result;
use ms_common::{
    AttachmentsScan, BlobStore, Deweaponized, MessageRecord, MetadataStore, PiiRedacted,
};
use ms_defang::{Defanger, RegexDefanger, RewriteRules};
use ms_normalize::Normalizer;
use ms_redact::{PatternRedactor, Redactor};
use ms_template::{RenderOutcome, TemplateRenderer};
use tracing::info;

/// Runs the sanitization stages in order over one message at a time.
///
/// Stages share no mutable state; the rewrite rules are fixed at
/// construction and every invocation threads its own record. The only
/// suspension points are the store reads and writes, whose failures are
/// surfaced unchanged.
pub struct Pipeline {
    normalizer: Normalizer,
    defanger: Box<dyn Defanger>,
    redactor: Box<dyn Redactor>,
    renderer: TemplateRenderer,
    raw_store: Box<dyn BlobStore>,
    artifacts: Box<dyn BlobStore>,
    metadata: Box<dyn MetadataStore>,
    base_template: String,
}

impl Pipeline {
    /// Create a pipeline with the baseline stage implementations.
    pub fn new(
        rules: RewriteRules,
        base_template: impl Into<String>,
        raw_store: Box<dyn BlobStore>,
        artifacts: Box<dyn BlobStore>,
        metadata: Box<dyn MetadataStore>,
    ) -> Self {
        Self {
            normalizer: Normalizer::new(),
            defanger: Box::new(RegexDefanger::new(rules)),
            redactor: Box::new(PatternRedactor::new()),
            renderer: TemplateRenderer::new(),
            raw_store,
            artifacts,
            metadata,
            base_template: base_template.into(),
        }
    }

    /// Swap in an alternative defang strategy.
    pub fn with_defanger(mut self, defanger: Box<dyn Defanger>) -> Self {
        self.defanger = defanger;
        self
    }

    /// Swap in an alternative redaction strategy.
    pub fn with_redactor(mut self, redactor: Box<dyn Redactor>) -> Self {
        self.redactor = redactor;
        self
    }

    /// Override the template renderer.
    pub fn with_renderer(mut self, renderer: TemplateRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Run all stages in order for the message at `source_reference`.
    pub fn run(&self, source_reference: &str) -> Result<RenderOutcome> {
        let raw = self.raw_store.get(source_reference)?;
        info!(source_reference, bytes = raw.len(), "pipeline started");

        let record = MessageRecord::new(source_reference);
        let record = self.normalize_stage(record, &raw);
        let record = self.deweaponize_stage(record)?;
        let record = self.redact_stage(record)?;
        let record = self.attachments_stage(record);
        self.render_stage(&record)
    }

    /// Stage 1: attach the normalized sub-record for `raw`.
    pub fn normalize_stage(&self, record: MessageRecord, raw: &[u8]) -> MessageRecord {
        record.with_normalized(self.normalizer.normalize(raw))
    }

    /// Stage 2: requires `normalized`, attaches `deweaponized`.
    pub fn deweaponize_stage(&self, record: MessageRecord) -> Result<MessageRecord> {
        let safe_html = self.defanger.defang(&record.normalized()?.html);
        Ok(record.with_deweaponized(Deweaponized { safe_html }))
    }

    /// Stage 3: requires `deweaponized`, attaches `pii`.
    pub fn redact_stage(&self, record: MessageRecord) -> Result<MessageRecord> {
        let html = self.redactor.redact(record.safe_html()?);
        Ok(record.with_pii(PiiRedacted { html }))
    }

    /// Attachment-scan stub: records that nothing was scanned.
    pub fn attachments_stage(&self, record: MessageRecord) -> MessageRecord {
        record.with_attachments(AttachmentsScan::stub())
    }

    /// Stage 4: requires `pii` and `normalized`; renders and persists.
    pub fn render_stage(&self, record: &MessageRecord) -> Result<RenderOutcome> {
        let normalized = record.normalized()?;
        let html = record.redacted_html()?;
        let outcome = self.renderer.render_and_store(
            &self.base_template,
            html,
            &normalized.fingerprint,
            &normalized.subject,
            self.artifacts.as_ref(),
            self.metadata.as_ref(),
        )?;
        info!(template_id = %outcome.template_id, "pipeline finished");
        Ok(outcome)
    }
}
