//! Static landing page sections. None of them take props.
mod about;
mod dont_miss;
mod information;
mod partnership;

pub use about::About;
pub use dont_miss::DontMiss;
pub use information::Information;
pub use partnership::Partnership;
