//! This is a Rust library holding the schema model for recordgen: record-type
//! definitions with lookup fields, and their materialized counterparts after a
//! remote identifier has been assigned to each one.
//!
//! ```
//! use recordgen_schema::*;
//!
//! let def = Definition {
//!     name: "Employees".to_owned(),
//!     identifier: "employees".to_owned(),
//!     fields: vec![FieldSpec {
//!         name: "fullname".to_owned(),
//!         kind: FieldKind::Text,
//!         label: "Full name".to_owned(),
//!         required: true,
//!         options: vec![],
//!         reference: None,
//!     }],
//! };
//!
//! let mut ctx = MaterializationContext::new();
//! ctx.materialize(&def, "E1");
//! assert_eq!(ctx.record_type_id("employees"), Some("E1"));
//! ```

pub mod def;
pub mod materialize;

pub use def::*;
pub use materialize::*;
