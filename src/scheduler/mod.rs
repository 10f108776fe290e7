pub mod ratelimit_sweep;
