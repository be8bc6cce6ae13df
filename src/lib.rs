//! # deskql — SQL compilation for legacy desktop database drivers
//!
//! Build queries as a typed, dialect-neutral AST and compile them to the SQL
//! text a legacy desktop driver actually accepts. Two dialects are supported:
//! **Desktop** (Jet-style database files) and **Spreadsheet** (worksheet
//! sources reached through the same driver family).
//!
//! Neither dialect has a native `LIMIT`/`OFFSET` clause, both use nonstandard
//! wildcard syntax, and both need structural rewriting of JOIN clauses and
//! table references. The compiler handles all of that and hands back the SQL
//! plus an ordered parameter-binding list.
//!
//! ```rust,ignore
//! use deskql::prelude::*;
//!
//! let query = Query::from("users")
//!     .column("id")
//!     .column("email")
//!     .filter(eq("active", true))
//!     .limit(10);
//!
//! let compiled = query.to_sql_with_dialect(Dialect::Desktop)?;
//! // compiled.sql      => "SELECT TOP ? [id], [email] FROM [users] WHERE [active] = ?"
//! // compiled.bindings => [10, true]
//! ```

pub mod ast;
pub mod compiler;
pub mod driver;
pub mod error;
pub mod wildcard;

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::compiler::{Binding, CompiledResult, Dialect, ToSql};
    pub use crate::driver::classify_driver_error;
    pub use crate::error::{SqlError, SqlResult};
}
