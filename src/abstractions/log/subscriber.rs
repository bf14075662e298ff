/*!

The two pieces of `tracing` machinery behind the `log` module: a `Layer` that drops events whose verbosity exceeds the
global threshold, and a field formatter that prints the message and any extra fields but never the verbosity itself.

*/

use std::fmt::Debug;

use tracing::{
  field::{Field, Visit},
  Event,
  Subscriber
};
use tracing_subscriber::{
  field::RecordFields,
  fmt::{format::Writer, FormatFields},
  layer::Context,
  registry::LookupSpan,
  Layer
};

use super::{get_global_logging_threshold, VERBOSITY_FIELD};

// region Filtering

/// Only lets through events logged at a verbosity at most the global logging threshold.
pub(crate) struct VerbosityFilterLayer;

impl<S> Layer<S> for VerbosityFilterLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
  fn event_enabled(&self, event: &Event<'_>, _ctx: Context<'_, S>) -> bool {
    let mut visitor = VerbosityVisitor::default();
    event.record(&mut visitor);

    // Events from outside this crate carry no verbosity and are always enabled.
    match visitor.verbosity {
      Some(verbosity) => verbosity <= get_global_logging_threshold() as u64,
      None            => true
    }
  }
}

#[derive(Default)]
struct VerbosityVisitor {
  verbosity: Option<u64>,
}

impl Visit for VerbosityVisitor {
  fn record_i64(&mut self, field: &Field, value: i64) {
    if field.name() == VERBOSITY_FIELD {
      // A negative verbosity is as quiet as it gets.
      self.verbosity = Some(value.max(0) as u64);
    }
  }

  fn record_u64(&mut self, field: &Field, value: u64) {
    if field.name() == VERBOSITY_FIELD {
      self.verbosity = Some(value);
    }
  }

  fn record_debug(&mut self, _field: &Field, _value: &dyn Debug) {}
}

// endregion

// region Formatting

pub(crate) struct VerbosityHidingFormatter;

impl<'writer> FormatFields<'writer> for VerbosityHidingFormatter {
  fn format_fields<R: RecordFields>(&self, writer: Writer<'writer>, fields: R) -> std::fmt::Result {
    let mut visitor = FieldWriter { writer };
    fields.record(&mut visitor);
    Ok(())
  }
}

struct FieldWriter<'writer> {
  writer: Writer<'writer>,
}

impl<'writer> Visit for FieldWriter<'writer> {
  fn record_bool(&mut self, field: &Field, value: bool) {
    match field.name() {
      "critical" if value => { let _ = write!(self.writer, "[CRITICAL] "); }
      "critical"          => {}
      name                => { let _ = write!(self.writer, "{}={} ", name, value); }
    }
  }

  fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
    match field.name() {
      "message"                      => { let _ = write!(self.writer, "{:?}", value); }
      name if name == VERBOSITY_FIELD => {}
      name                           => { let _ = write!(self.writer, "{}={:?} ", name, value); }
    }
  }
}

// endregion
