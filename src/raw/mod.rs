mod arena;
mod handle;
mod node;
mod raw_dictionary;

pub(crate) use handle::Handle;
pub(crate) use node::{Direction, Node};
pub(crate) use raw_dictionary::{RawDictionary, Stack};
