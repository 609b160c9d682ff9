pub use crate::{external_deps::*, prelude::*};
