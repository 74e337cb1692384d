pub mod julian;
pub mod mean_motion;
pub mod retrograde;
pub mod types;

pub use julian::{days_since_j2000, julian_day_number, J2000};
pub use mean_motion::{LongitudeModel, MeanMotionModel};
pub use retrograde::{DirectMotion, RetrogradeMode, RetrogradePolicy, SeededDraw};
pub use types::{Body, Planet};
