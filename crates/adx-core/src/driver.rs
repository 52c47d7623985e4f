mod response;
pub use response::{Column, Response, Row};

pub mod operation;
pub use operation::Operation;

use crate::async_trait;

use std::{borrow::Cow, fmt::Debug};

/// Management client for a Kusto cluster.
///
/// A driver accepts management operations, turns them into control commands
/// and returns the tabular result. Drivers perform no retries.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// The cluster endpoint commands are sent to. Forms the first segment of
    /// every resource ID.
    fn endpoint(&self) -> Cow<'_, str>;

    /// Execute a management operation in the context of `database`.
    async fn exec(&self, database: &str, op: Operation) -> crate::Result<Response>;
}
