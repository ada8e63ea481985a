//! Process-wide factory wiring.
//!
//! [`HttpFactories`] is built once at start-up and hands out a response and a
//! stream factory that share one primitive instance.
//!
//! # Examples
//!
//! ```rust
//! use http_factory::{HttpFactories, ResponseFactory, StreamFactory};
//!
//! let factories: HttpFactories = HttpFactories::default();
//! let response = factories.responses().create_response_from_text("ready");
//! let stream = factories.streams().create_stream("ready")?;
//! assert_eq!(stream.len(), Some(5));
//! # Ok::<(), http_factory::Error>(())
//! ```
use std::sync::Arc;

use crate::primitive::{BasicPrimitive, ResponsePrimitive, StreamPrimitive};
use crate::{ResponseBuilder, StreamBuilder};

/// A response factory and a stream factory backed by one shared primitive.
#[derive(Debug, Clone)]
pub struct HttpFactories<P = BasicPrimitive> {
    responses: ResponseBuilder<Arc<P>>,
    streams: StreamBuilder<Arc<P>>,
}

impl<P> HttpFactories<P>
where
    P: ResponsePrimitive + StreamPrimitive,
{
    /// Wires both factories to `primitive`.
    pub fn new(primitive: P) -> Self {
        Self::from_shared(Arc::new(primitive))
    }

    /// Wires both factories to an already shared primitive.
    pub fn from_shared(primitive: Arc<P>) -> Self {
        Self {
            responses: ResponseBuilder::new(Arc::clone(&primitive)),
            streams: StreamBuilder::new(primitive),
        }
    }

    /// Returns the response factory.
    pub const fn responses(&self) -> &ResponseBuilder<Arc<P>> {
        &self.responses
    }

    /// Returns the stream factory.
    pub const fn streams(&self) -> &StreamBuilder<Arc<P>> {
        &self.streams
    }

    /// Returns the shared primitive.
    pub fn primitive(&self) -> &Arc<P> {
        self.responses.primitive()
    }
}

impl<P> Default for HttpFactories<P>
where
    P: ResponsePrimitive + StreamPrimitive + Default,
{
    fn default() -> Self {
        Self::new(P::default())
    }
}
