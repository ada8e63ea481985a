//! Generic message primitives consumed by the factories.
//!
//! The factories never build bare responses or raw streams themselves. They
//! delegate to a [`ResponsePrimitive`] and a [`StreamPrimitive`] injected at
//! construction time. Any implementation works; [`BasicPrimitive`] is the one
//! shipped with this crate.
//!
//! Both traits require `Send + Sync`, so a primitive can back builders that
//! are shared between threads. They are also implemented for `&P` and
//! `Arc<P>`, which lets several builders share a single primitive.
//!
//! # Examples
//!
//! ```rust
//! use http_factory::{Body, Response, ResponsePrimitive};
//! use http::StatusCode;
//! use std::convert::Infallible;
//!
//! struct AlwaysTeapot;
//!
//! impl ResponsePrimitive for AlwaysTeapot {
//!     type Error = Infallible;
//!
//!     fn create_response(&self, _status: u16, _reason: &str) -> Result<Response, Infallible> {
//!         Ok(Response::new(StatusCode::IM_A_TEAPOT, Body::empty()))
//!     }
//! }
//! ```
mod basic;
mod mode;

pub use basic::{BasicError, BasicPrimitive, Resource};
pub use mode::{FileMode, InvalidMode};

use crate::{Body, Response};
use core::future::Future;
use std::path::Path;
use std::sync::Arc;

/// Builds bare responses from a status code and reason phrase.
pub trait ResponsePrimitive: Send + Sync {
    /// The error returned for invalid input, such as an out-of-range status.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Creates a response with the given status and reason phrase.
    ///
    /// An empty reason phrase asks for the default phrase of the status.
    fn create_response(&self, status: u16, reason: &str) -> Result<Response, Self::Error>;
}

/// Builds raw streams from strings, files and resource handles.
pub trait StreamPrimitive: Send + Sync {
    /// The error returned when a stream cannot be created.
    type Error: core::error::Error + Send + Sync + 'static;

    /// The handle type accepted by
    /// [`create_stream_from_resource`](Self::create_stream_from_resource).
    type Resource;

    /// Creates a stream holding `content`.
    fn create_stream(&self, content: &str) -> Result<Body, Self::Error>;

    /// Opens `path` with an fopen-style `mode` and streams its content.
    fn create_stream_from_file(
        &self,
        path: &Path,
        mode: &str,
    ) -> impl Future<Output = Result<Body, Self::Error>> + Send;

    /// Wraps an already-open resource handle as a stream.
    fn create_stream_from_resource(&self, resource: Self::Resource) -> Result<Body, Self::Error>;
}

macro_rules! impl_shared_primitive {
    ($($ty:ty),*) => {
        $(
            impl<P: ResponsePrimitive + ?Sized> ResponsePrimitive for $ty {
                type Error = P::Error;

                fn create_response(&self, status: u16, reason: &str) -> Result<Response, Self::Error> {
                    (**self).create_response(status, reason)
                }
            }

            impl<P: StreamPrimitive + ?Sized> StreamPrimitive for $ty {
                type Error = P::Error;
                type Resource = P::Resource;

                fn create_stream(&self, content: &str) -> Result<Body, Self::Error> {
                    (**self).create_stream(content)
                }

                fn create_stream_from_file(
                    &self,
                    path: &Path,
                    mode: &str,
                ) -> impl Future<Output = Result<Body, Self::Error>> + Send {
                    (**self).create_stream_from_file(path, mode)
                }

                fn create_stream_from_resource(
                    &self,
                    resource: Self::Resource,
                ) -> Result<Body, Self::Error> {
                    (**self).create_stream_from_resource(resource)
                }
            }
        )*
    };
}

impl_shared_primitive![&P, Arc<P>];
