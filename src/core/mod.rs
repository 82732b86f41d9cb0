// Domain-layer modules and shared errors/models
pub mod intake {
    pub use crate::intake::*;
}

pub mod form {
    pub use crate::form::*;
}

pub mod models {
    pub use crate::models::*;
}

pub mod errors {
    pub use crate::errors::*;
}
