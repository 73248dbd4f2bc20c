//! # Mailsmith HTML Compiler
//!
//! Renders an email [`Document`](mailsmith_model::Document) into a single
//! self-contained HTML document: doctype, head with inline styles, and a
//! body of nested layout tables with explicit pixel widths. That layout
//! convention is what real email clients can render; flexbox and grid are
//! never valid output here, whatever the live-editing canvas uses.
//!
//! The compiler is a pure function of (document, options): no side effects,
//! no failure path, byte-identical output for equal inputs.

mod compiler;

#[cfg(test)]
mod tests;

pub use compiler::{render, render_with_options, RenderOptions, CONTAINER_WIDTH};
