use std::fmt;
use std::sync::Arc;

use crate::encode::{Converter, DynamicConverter};

/// Encoder configuration.
///
/// Shared between calls by reference and treated as read-only; anything that
/// needs a modified view clones it first (see
/// [`DynamicConverter`](crate::encode::DynamicConverter)). Cloning copies
/// every option and the full ordered converter list.
#[derive(Clone)]
pub struct CodecOptions {
    /// Pretty-print output (default: compact).
    pub pretty: bool,
    /// Indentation width for pretty output (default: 2 spaces).
    pub indent: usize,
    /// Registered converters, consulted in order before the default encoder.
    pub converters: Vec<Arc<dyn Converter>>,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: 2,
            converters: Vec::new(),
        }
    }
}

impl CodecOptions {
    /// Register `converter` at the end of the lookup order.
    pub fn register(&mut self, converter: Arc<dyn Converter>) {
        self.converters.push(converter);
    }

    /// Default options with the any-typed converter registered.
    pub fn with_dynamic_converter() -> Self {
        let mut options = Self::default();
        options.register(Arc::new(DynamicConverter));
        options
    }
}

impl fmt::Debug for CodecOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecOptions")
            .field("pretty", &self.pretty)
            .field("indent", &self.indent)
            .field(
                "converters",
                &self.converters.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
