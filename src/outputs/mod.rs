//! Output generation for crawl results and source reports.
//!
//! # Submodules
//!
//! - [`json`]: Writes the texts, VALIDS and INVALIDS files of a crawl
//! - [`console`]: Formats the `sources` report printed to stdout
//!
//! # Output Structure
//!
//! ```text
//! datasets/
//! ├── texts_GermanFakeNC.json     # [{"title": ..., "text": ...}, ...]
//! ├── VALIDS_GermanFakeNC.json    # entries copied verbatim
//! └── INVALIDS_GermanFakeNC.json  # entries copied verbatim
//! ```

pub mod console;
pub mod json;
