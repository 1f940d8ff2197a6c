// Pitch page sections

mod calculator;
mod footer;
mod hero;
mod nav;
mod problem;
mod revenue;
mod widgets;

pub use calculator::Calculator;
pub use footer::{Footer, Sources};
pub use hero::Hero;
pub use nav::Nav;
pub use problem::{MoatAndRisks, ProblemSolution};
pub use revenue::RevenueSection;
pub use widgets::ChartGradients;
