//! Record types and MongoDB collection access for the Car Doctor backend.

pub mod ack;
pub mod booking;
pub mod catalog;
pub mod db;
pub mod errors;
pub mod ids;
