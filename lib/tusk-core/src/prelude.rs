//! Prelude module for convenient imports.
//!
//! ```ignore
//! use tusk_core::prelude::*;
//! ```

pub use crate::{
    Error, HttpClient, Method, Pageable, Parameters, Range, Request, RequestBuilder, Response,
    Result, ToParameters, from_json,
};
