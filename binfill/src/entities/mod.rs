mod container;
mod instance;
mod item;
mod placement;
mod problem;
mod solution;

#[doc(inline)]
pub use container::Container;

#[doc(inline)]
pub use instance::Instance;

#[doc(inline)]
pub use item::Item;

#[doc(inline)]
pub use placement::Placement;

#[doc(inline)]
pub use problem::Problem;

#[doc(inline)]
pub use solution::Solution;
