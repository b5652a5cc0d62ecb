//! Ports - boundary contracts to external collaborators.
//!
//! Persistence, document translation history and bookmarks are owned by
//! excluded infrastructure; this core only talks to them through these
//! traits.

mod bookmark_reader;
mod calculation_store;
mod document_reader;
mod journey_repository;

pub use bookmark_reader::BookmarkReader;
pub use calculation_store::CalculationStore;
pub use document_reader::DocumentReader;
pub use journey_repository::JourneyRepository;
