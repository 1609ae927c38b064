//! Smallest pairwise Euclidean distance of a planar point set.
//!
//! Two solvers compute the same value: [`closest_pair_brute_force`] scans every pair,
//! [`closest_pair_divide_and_conquer`] splits the x-sorted points recursively and merges
//! across the split line in O(n log n). Around them sit a point file reader, a distance
//! writer, a random point generator and a harness cross-checking both solvers.
pub mod export;
pub mod generate;
pub mod geometry;
pub mod import;
pub mod rng;
pub mod solver;
pub mod trial;
pub mod trial_config;

pub use geometry::{distance, Point, PointSet};
pub use solver::{
    closest_pair_brute_force, closest_pair_divide_and_conquer, BruteForce, DivideAndConquer,
    InvalidInputError, Solver,
};
