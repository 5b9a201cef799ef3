pub mod canonicalize;
pub mod inspect;
pub mod public_key;
pub mod sign;
pub mod verify;
