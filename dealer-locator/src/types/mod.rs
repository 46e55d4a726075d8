mod dealer;
pub use dealer::Dealer;

mod filter;
pub use filter::DealerFilter;

mod place;
pub use place::Place;
