use core::future::Future;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, trace};

use super::StreamFactory;
use crate::primitive::StreamPrimitive;
use crate::{Body, Error, JsonStream, Result};

/// A [`StreamFactory`] backed by a [`StreamPrimitive`].
///
/// String, file and resource streams come from the primitive. Payload streams
/// are encoded here.
#[derive(Debug, Clone, Default)]
pub struct StreamBuilder<P> {
    primitive: P,
}

impl<P: StreamPrimitive> StreamBuilder<P> {
    /// Creates a builder delegating raw streams to `primitive`.
    pub const fn new(primitive: P) -> Self {
        Self { primitive }
    }

    /// Returns the injected primitive.
    pub const fn primitive(&self) -> &P {
        &self.primitive
    }

    /// Consumes the builder and returns the primitive.
    pub fn into_primitive(self) -> P {
        self.primitive
    }
}

impl<P: StreamPrimitive> StreamFactory for StreamBuilder<P> {
    type Resource = P::Resource;

    fn create_stream(&self, content: &str) -> Result<Body> {
        self.primitive.create_stream(content).map_err(|error| {
            debug!(%error, "stream primitive failed");
            Error::primitive(error)
        })
    }

    fn create_stream_from_file(
        &self,
        path: &Path,
        mode: &str,
    ) -> impl Future<Output = Result<Body>> + Send {
        let opening = self.primitive.create_stream_from_file(path, mode);
        async move {
            opening.await.map_err(|error| {
                debug!(path = %path.display(), mode, %error, "file stream failed");
                Error::primitive(error)
            })
        }
    }

    fn create_stream_from_resource(&self, resource: Self::Resource) -> Result<Body> {
        self.primitive
            .create_stream_from_resource(resource)
            .map_err(|error| {
                debug!(%error, "resource stream failed");
                Error::primitive(error)
            })
    }

    fn create_stream_from_payload<T>(&self, payload: &T) -> Result<JsonStream>
    where
        T: Serialize + ?Sized,
    {
        trace!("creating json stream");
        JsonStream::new(payload).map_err(|error| {
            debug!(%error, "payload rejected");
            error.into()
        })
    }
}
