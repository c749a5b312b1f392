//! balldontlie API collaborator: HTTP transport, pagination and record types.

pub mod http;
pub mod types;

pub use http::{BdlClient, ClientConfig, Endpoint, BDL_BASE_URL};
pub use types::{Game, Meta, Page, Player, Team};
