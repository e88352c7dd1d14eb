mod cbc;
mod cfb;
mod ctr;
mod ecb;
mod ofb;
pub(crate) mod util;

pub use cbc::{cbc_core_dec, cbc_core_enc};
pub use cfb::{cfb_core_dec, cfb_core_enc};
pub use ctr::ctr_core;
pub use ecb::{ecb_core_dec, ecb_core_enc};
pub use ofb::ofb_core;
