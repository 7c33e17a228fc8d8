//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Duplicate menu link id: {0}")]
    DuplicateMenuLink(String),

    #[error("Menu link '{link}' references unknown parent '{parent}'")]
    UnknownMenuParent { link: String, parent: String },

    #[error("Duplicate breadcrumb builder id: {0}")]
    DuplicateBuilder(String),
}
