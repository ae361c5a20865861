pub mod document;
pub mod dto;
pub mod error;
pub mod model;
pub mod prompt;
pub mod service;

pub use dto::{StoryRequest, StoryResponse};
pub use error::StoryServiceError;
pub use model::{GeneratedText, MediaAsset, ReadingLevel, TextGenerationParams, ValidatedStoryRequest};
pub use service::{Narrator, StoryCollaborators, StoryService, StoryServiceApi, StorybookDocument};
