//! EU member states and the United Kingdom (feature `eu`).

mod at;
mod be;
mod bg;
mod cy;
mod cz;
mod de;
mod dk;
mod ee;
mod es;
mod fi;
mod fr;
mod gr;
mod hr;
mod hu;
mod ie;
mod it;
mod lt;
mod lu;
mod lv;
mod mt;
mod nl;
mod pl;
mod pt;
mod ro;
mod se;
mod si;
mod sk;
mod uk;

pub use at::Austria;
pub use be::Belgium;
pub use bg::Bulgaria;
pub use cy::Cyprus;
pub use cz::CzechRepublic;
pub use de::Germany;
pub use dk::Denmark;
pub use ee::Estonia;
pub use es::Spain;
pub use fi::Finland;
pub use fr::France;
pub use gr::Greece;
pub use hr::Croatia;
pub use hu::Hungary;
pub use ie::Ireland;
pub use it::Italy;
pub use lt::Lithuania;
pub use lu::Luxembourg;
pub use lv::Latvia;
pub use mt::Malta;
pub use nl::Netherlands;
pub use pl::Poland;
pub use pt::Portugal;
pub use ro::Romania;
pub use se::Sweden;
pub use si::Slovenia;
pub use sk::Slovakia;
pub use uk::UnitedKingdom;
