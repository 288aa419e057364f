//! Client side of the refinement service.
//!
//! [`RefinementService`] is the seam the request controller talks to;
//! [`HttpRefinementClient`] implements it over the `POST /generate`
//! contract.

mod error;
mod http;

pub use error::{GenerationError, CONNECT_FAILED_MESSAGE, GENERATE_FAILED_MESSAGE};
pub use http::{interpret_reply, HttpRefinementClient};

use async_trait::async_trait;

use crate::prompt::{PromptRequest, PromptResponse};

/// External collaborator that turns a base prompt into a refined one.
#[async_trait]
pub trait RefinementService: Send + Sync {
    /// Perform one refinement round trip. Implementations must not retry.
    async fn refine(&self, request: &PromptRequest) -> Result<PromptResponse, GenerationError>;
}
