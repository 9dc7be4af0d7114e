//! folder2pdf: Image Folder to PDF Library
//!
//! A library for merging the JPG/PNG images of a folder, in file-name order,
//! into a single PDF, plus the interactive menu loop that drives it.

pub mod cleanup;
pub mod cli;
pub mod convert;
pub mod logging;
pub mod report;
pub mod utils;
