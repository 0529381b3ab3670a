mod aggregation;
mod common;
mod overall;
