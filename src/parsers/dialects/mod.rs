//! The six chat portal dialects

pub mod blackbasta;
pub mod fog;
pub mod hive;
pub mod lockbit;
pub mod mountlocker;
pub mod trinity;

pub use blackbasta::BLACK_BASTA;
pub use fog::FOG;
pub use hive::HIVE;
pub use lockbit::LOCKBIT;
pub use mountlocker::MOUNTLOCKER;
pub use trinity::TRINITY;
