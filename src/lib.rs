//! Translate parsed SQL statement trees into REST query-dialect requests.
//!
//! The input is an already-parsed statement tree (SELECT, INSERT, UPDATE or
//! DELETE); the output is a request description for a table-per-resource
//! REST protocol: HTTP method, resource path, ordered query parameters,
//! optional JSON body and headers. The engine is a pure function of its
//! input — it performs no I/O, holds no state and never re-parses text.
//!
//! ```
//! use sql2rest::prelude::*;
//!
//! let stmt = SelectStatement::from_table("users")
//!     .columns(["id", "name"])
//!     .filter(PredicateNode::gt("age", 18))
//!     .limit(10);
//! let request = translate(&stmt.into())?;
//! assert_eq!(request.method, Method::Get);
//! assert_eq!(request.path, "/users");
//! assert_eq!(request.params.get("age"), Some(&["gt.18".to_string()][..]));
//! # Ok::<(), sql2rest::TranslateError>(())
//! ```
//!
//! SQL features the dialect cannot express (CTEs, subqueries, window
//! functions, HAVING) are rejected with named errors, and a mutation without
//! a WHERE clause never translates.

pub mod ast;
pub mod error;
pub mod request;
pub mod translate;

pub use error::{TranslateError, TranslateResult};
pub use request::{ConversionResult, Method, QueryParams};
pub use translate::{MAX_FILTER_DEPTH, ToRequest, translate};

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::error::{TranslateError, TranslateResult};
    pub use crate::request::{ConversionResult, Method, QueryParams};
    pub use crate::translate::{ToRequest, translate};
}
