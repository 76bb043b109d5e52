use crate::element::Element;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlayerError {
	#[error("Required player element '{0}' is missing.")]
	MissingElement(Element),
}
