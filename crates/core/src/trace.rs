use tracing::{debug, info};

use crate::{AlterTableSpec, FieldType};

/// Diagnostic side channel for the renderer. Events are advisory and never
/// change the rendered text.
pub trait RenderTrace: Send + Sync {
    fn field_type_rendered(&self, _field_type: &FieldType, _text: &str) {}
    fn spec_rendered(&self, _index: usize, _spec: &AlterTableSpec, _text: &str) {}
    fn statement_rendered(&self, _sql: &str) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTrace;

impl RenderTrace for NoopTrace {}

/// Forwards render events to the `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTrace;

impl RenderTrace for TracingTrace {
    fn field_type_rendered(&self, field_type: &FieldType, text: &str) {
        debug!(
            tp = ?field_type.tp,
            flags = ?field_type.flags,
            flen = ?field_type.flen,
            decimal = ?field_type.decimal,
            charset = ?field_type.charset,
            collate = ?field_type.collate,
            text,
            "rendered field type"
        );
    }

    fn spec_rendered(&self, index: usize, spec: &AlterTableSpec, text: &str) {
        debug!(index, spec = spec.variant_name(), text, "rendered alter spec");
    }

    fn statement_rendered(&self, sql: &str) {
        info!(sql, "rendered alter table statement");
    }
}
