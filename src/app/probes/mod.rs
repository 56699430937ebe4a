pub mod auth;
pub mod listing;
pub mod root;

pub use auth::{CurrentUserProbe, SignupProbe};
pub use listing::ListProbe;
pub use root::RootProbe;

use crate::domain::ports::Probe;

/// 固定順序的完整探測清單
pub fn standard_probes() -> Vec<Box<dyn Probe>> {
    vec![
        Box::new(RootProbe::new()),
        Box::new(ListProbe::exercises()),
        Box::new(ListProbe::skills()),
        Box::new(SignupProbe::new()),
        Box::new(CurrentUserProbe::new()),
    ]
}
