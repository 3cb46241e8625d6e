//! Input model mirroring the AWS Textract block schema.
//!
//! These types deserialize Textract JSON directly; everything derived
//! from them (indexes, page models, reading order) lives in [`crate::layout`].

mod block;
mod document;
mod geometry;

pub use block::{Block, BlockType, Relationship, RelationshipType, DEFAULT_CONFIDENCE};
pub use document::{DocumentMetadata, TextractDocument};
pub use geometry::{BoundingBox, Geometry, PixelBox, Point};
