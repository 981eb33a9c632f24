pub mod controller;

mod hinge;
mod prismatic;

pub use hinge::{Hinge, HingeData};
pub use prismatic::{Prismatic, PrismaticData};
