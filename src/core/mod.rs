pub mod aggregator;
pub mod calculator;
pub mod draft;
pub mod engine;
pub mod overlay;
pub mod quick;
pub mod resolvers;

pub use crate::domain::model::{LineItem, ProposalEstimate, ProposalRequest, ServiceSelection};
pub use crate::domain::ports::DraftStore;
pub use crate::utils::error::Result;
