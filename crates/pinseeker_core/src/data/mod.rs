//! Embedded course data.

mod duvenhof;

pub use duvenhof::duvenhof_course;
