//! Message roles at the generation boundary.

use serde::{Deserialize, Serialize};

/// Who a request message speaks as.
///
/// Lumiere requests pair an instruction with a script: the instruction
/// template rides as [`Role::System`], the script itself as
/// [`Role::User`]. [`Role::Assistant`] marks prior model output when a
/// caller threads a conversation. Providers map these onto their own
/// role vocabulary at the client boundary.
///
/// # Examples
///
/// ```
/// use lumiere_core::Role;
///
/// assert_ne!(Role::System, Role::User);
/// assert_eq!(format!("{}", Role::System), "System");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// The instruction side of a request
    System,
    /// The caller's input, usually the script text
    User,
    /// Prior model output in a threaded exchange
    Assistant,
}
