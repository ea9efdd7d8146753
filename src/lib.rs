//! A fixed-template invoice renderer.
//!
//! One [InvoiceRecord] in, one single-page A4 PDF out, always in the same
//! brand layout: logo and issuer block up top, a bill-to panel, a one-row
//! item table with an attached totals box, payment instructions, and a
//! footer over a brand stripe. Batch tooling feeds records through a single
//! [InvoiceComposer]; each render is independent and deterministic.
//!
//! The PDF itself is produced with [pdf_writer], with TrueType faces
//! embedded as CID fonts and measured through their real glyph metrics.
//!
//! ```no_run
//! use invoice_gen::*;
//!
//! fn main() -> Result<(), RenderError> {
//!     let mut doc = Document::default();
//!     let fonts = FontRegistry::load_dir(&mut doc, "fonts", "Montserrat")?;
//!
//!     let record = InvoiceRecord {
//!         invoice_number: Some(Field::text("1322")),
//!         invoice_date: Some(Field::text("2025-12-30")),
//!         bill_to_address: Some(Field::text("Dell Technologies\n1 Dell Way")),
//!         amount: Some(Field::number(2500.0)),
//!         ..Default::default()
//!     };
//!
//!     let composer = InvoiceComposer::new(pagesize::A4);
//!     let mut surface = PageSurface::new(&doc, &fonts, Page::new(pagesize::A4));
//!     composer.render(&record, &mut surface);
//!     let page = surface.finish();
//!     doc.add_page(page);
//!
//!     doc.write(std::fs::File::create("1322_Dell.pdf")?)
//! }
//! ```

mod colour;
mod compose;
mod document;
mod error;
mod font;
mod format;
mod geometry;
mod image;
mod info;
mod invoice;
pub mod layout;
pub mod naming;
mod page;
pub mod pagesize;
mod rect;
pub(crate) mod refs;
mod surface;
mod theme;
mod units;

pub use colour::*;
pub use compose::*;
pub use document::*;
pub use error::*;
pub use font::*;
pub use format::*;
pub use geometry::*;
pub use image::*;
pub use info::*;
pub use invoice::*;
pub use page::*;
pub use pagesize::{PageOrientation, PageSize};
pub use rect::*;
pub use surface::*;
pub use theme::*;
pub use units::*;

pub use pdf_writer;

#[cfg(test)]
pub(crate) mod testing;
