#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(missing_docs)]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/georust/meta/master/logo/logo.png",
    html_favicon_url = "https://github.com/georust.png?size=32"
)]

mod common;
mod cursor;
pub mod driver;
pub mod envelope;
pub mod error;
pub mod geometry;
#[cfg(test)]
mod test;

pub use common::{Dimension, Endianness, GeometryType};
pub use envelope::Envelope;
pub use geometry::Geometry;
