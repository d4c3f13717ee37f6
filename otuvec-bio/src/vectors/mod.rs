//! Vectors derived from a community partition
//!
//! Each vector carries the label of the partition it came from so that a batch
//! over several labels stays traceable.

pub mod order;
pub mod rabund;
pub mod sabund;
pub mod shared_order;

use otuvec_core::OtuResult;
use serde::Serialize;
use std::io::Write;

pub use order::OrderVector;
pub use rabund::RankAbundanceVector;
pub use sabund::SpeciesAbundanceVector;
pub use shared_order::{SharedOrderEntry, SharedOrderVector};

/// Write `value` as a single line of JSON
pub fn write_json_line<T, W>(value: &T, out: &mut W) -> OtuResult<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
