#![forbid(unsafe_code)]

pub mod codec;
pub mod model;
pub mod pricing;
pub mod store;
pub mod util;
pub mod validate;

pub use codec::{DecodeError, EncodeError, decode, encode};
pub use model::{Coordinate, Path, ProjectRecord, Region, RegionKind, SodLocation};
pub use store::{ImportError, PackageStore, StoreConfig, StoreEvent};
pub use validate::{narrow, validate};
