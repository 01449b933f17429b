//! Background language resources.
//!
//! Both resources are loaded once at startup and shared read-only across
//! summarization runs: the stop-word set and the general-language reference
//! frequency table used to discount generically common lemmas.

pub mod reference;
pub mod stopwords;

pub use reference::ReferenceFrequencies;
pub use stopwords::StopwordSet;
