mod dealers;

pub use dealers::Dealers;
