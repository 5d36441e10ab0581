//! User-based collaborative filtering over an in-memory rating table.
//!
//! Ratings are loaded from a delimited text file into a [`models::RatingStore`];
//! [`services::Recommender`] scores the items a user has not rated yet by the
//! Pearson similarity of every other user, and the [`api`] module serves those
//! recommendations over HTTP.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
