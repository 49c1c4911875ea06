// Element-wise transcendental functions
pub mod exp;
pub mod tanh;
