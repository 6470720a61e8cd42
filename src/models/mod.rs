pub mod bs;

pub use bs::{bs_price, norm_cdf, round_to, OptionParameters, PnlKind, PriceResult};
