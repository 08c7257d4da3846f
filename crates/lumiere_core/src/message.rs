//! Message types for model requests.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A text message in a generation request.
///
/// Lumiere requests are text-only: a script excerpt, an instruction, or a
/// previously generated response. Roles map onto the provider's own
/// conversation roles at the client boundary.
///
/// # Examples
///
/// ```
/// use lumiere_core::{Message, Role};
///
/// let message = Message {
///     role: Role::User,
///     content: "INT. OFFICE - DAY".to_string(),
/// };
///
/// assert_eq!(message.role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text content of the message
    pub content: String,
}
