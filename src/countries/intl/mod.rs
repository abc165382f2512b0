//! Jurisdictions outside the EU (feature `intl`).

mod ar;
mod au;
mod br;
mod ca;
mod ch;
mod cn;
mod id;
// `in` is a keyword
mod ind;
mod jp;
mod kr;
mod mx;
mod ng;
mod ru;
mod sa;
mod tr;
mod ua;
mod us;
mod za;

pub use ar::Argentina;
pub use au::Australia;
pub use br::Brazil;
pub use ca::Canada;
pub use ch::Switzerland;
pub use cn::China;
pub use id::Indonesia;
pub use ind::India;
pub use jp::Japan;
pub use kr::SouthKorea;
pub use mx::Mexico;
pub use ng::Nigeria;
pub use ru::Russia;
pub use sa::SaudiArabia;
pub use tr::Turkey;
pub use ua::Ukraine;
pub use us::UnitedStates;
pub use za::SouthAfrica;
