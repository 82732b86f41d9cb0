//! External service integrations.

pub mod mailer {
    pub use crate::mailer::*;
}

pub mod client {
    pub use crate::client::*;
}
