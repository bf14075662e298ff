/*!

# Overview

The `log` module provides leveled logging with a numeric verbosity. The level describes what _kind_ of message is
logged, and the verbosity attached to each message says how chatty it is. A message is emitted only if its verbosity
is at most the global logging threshold.

```
use sortlib::log::*;

// Only messages at verbosity 1 or below are emitted from here on.
set_global_logging_threshold(1);

warning!(2, "Sort redefined.");         // Not emitted
info!(1, "Language L constructed.");    // Emitted
debug!("Registered predicate at/2.");   // Emitted: no verbosity means verbosity 0
```

## Threshold

The global logging threshold is a process-wide value, shared by all levels. Messages logged at a verbosity less
than or equal to the threshold are emitted; a message logged at verbosity 0 is always emitted.

```
use sortlib::log::{set_global_logging_threshold, get_global_logging_threshold};

set_global_logging_threshold(4);
assert_eq!(get_global_logging_threshold(), 4);
```

The library itself logs language construction and freezing at verbosity 2, successful registrations at verbosity 4,
rejected registrations at verbosity 2, and rejected hierarchy cycles at verbosity 1. The default threshold is 3.

## Macros

`critical!`, `error!`, `warning!`, `info!`, `debug!` and `trace!` all share the syntax

```ignore
level!(verbosity, "format string", args...);
level!("format string", args...); // verbosity 0
```

The subscriber is installed on first use; no explicit initialization is required.

*/

mod subscriber;
mod macros;

use std::sync::atomic::{AtomicU8, Ordering};

use once_cell::sync::Lazy;
use tracing_subscriber::{
  fmt,
  layer::SubscriberExt,
  Registry
};

use subscriber::{VerbosityFilterLayer, VerbosityHidingFormatter};
pub use macros::*;

// Used by the exported macros so downstream crates need not depend on `tracing` themselves.
#[doc(hidden)]
pub use tracing;

/// The name of the event field carrying a message's verbosity.
pub(crate) const VERBOSITY_FIELD: &str = "verbosity";

static INIT_LOGGER: Lazy<()> = Lazy::new(|| {
  let subscriber = Registry::default()
      .with(VerbosityFilterLayer)
      .with(
        fmt::layer()
            .fmt_fields(VerbosityHidingFormatter)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stdout),
      );

  // A host application may already have installed its own subscriber, in which case we defer to it.
  let _ = tracing::subscriber::set_global_default(subscriber);
});

/// Installs the subscriber if it is not yet installed. The logging macros call this for you.
pub fn init_logger() {
  Lazy::force(&INIT_LOGGER);
}

static GLOBAL_LOGGING_THRESHOLD: AtomicU8 = AtomicU8::new(3);

/// Sets the global logging threshold. Messages with a greater verbosity are dropped.
pub fn set_global_logging_threshold(new_threshold: u8) {
  GLOBAL_LOGGING_THRESHOLD.store(new_threshold, Ordering::SeqCst);
}

pub fn get_global_logging_threshold() -> u8 {
  GLOBAL_LOGGING_THRESHOLD.load(Ordering::SeqCst)
}
