//! Growth and finance calculators: compounding increase, doubling time,
//! compound interest and the opportunity cost of recurring spending.

pub mod compound_interest;
pub mod compounding;
pub mod doubling_time;
pub mod opportunity_cost;

pub use compound_interest::{CompoundInterestInput, CompoundInterestResult};
pub use compounding::{CompoundingInput, CompoundingResult, GrowthPoint};
pub use doubling_time::{DoublingTimeInput, DoublingTimeResult};
pub use opportunity_cost::{HorizonProjection, OpportunityCostInput, OpportunityCostResult, SpendingFrequency};
