//! Low-cost-carrier fare search server.
//!
//! A web application that answers: "what is the cheapest way to fly
//! between these airports around these dates?", considering direct
//! flights and one-stop connections built from two one-way fares.

pub mod airports;
pub mod cache;
pub mod domain;
pub mod ryanair;
pub mod search;
pub mod web;
