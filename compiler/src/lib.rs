//! recordgen-compiler
//!
//! This crate implements:
//!  1) A dependency resolver ordering record-type definitions so every lookup
//!     target comes before its dependents (`order` / `order_strict`),
//!  2) A batch verifier (duplicate identifiers, dangling lookups, empty input),
//!  3) The naming transforms shared by every generated artifact (`names`),
//!  4) A small TypeScript declaration tree with a single formatter (`doc`),
//!  5) The types/service document generators (`compile_types`,
//!     `compile_service`), and error types (`CompileError`).

pub mod error;
pub mod names;
pub mod resolver;
pub mod verifier;
pub mod doc;
pub mod gen_types;
pub mod gen_service;

pub use error::CompileError;
pub use resolver::{order, order_strict};
pub use verifier::verify_definitions;
pub use gen_types::compile_types;
pub use gen_service::{compile_service, ServiceOptions};
