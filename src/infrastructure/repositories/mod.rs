pub mod generation_repository;
pub mod google_tts_repository;
pub mod huggingface_image_repository;
pub mod huggingface_text_repository;
pub mod huggingface_tts_repository;
pub mod huggingface_video_repository;
pub mod tts_repository;

pub use generation_repository::{
    ImageGenerationRepository, TextGenerationRepository, VideoGenerationRepository,
};
pub use google_tts_repository::GoogleTtsRepository;
pub use huggingface_image_repository::HuggingFaceImageRepository;
pub use huggingface_text_repository::HuggingFaceTextRepository;
pub use huggingface_tts_repository::HuggingFaceTtsRepository;
pub use huggingface_video_repository::HuggingFaceVideoRepository;
pub use tts_repository::TtsRepository;
