// General
pub const DEFAULT_MAX_TOKEN_ALLOWED: u32 = 8000;
pub const HANDLE_TIMEOUT_SECS: u64 = 120;
pub const DISCOVERY_TIMEOUT_SECS: u64 = 30;

// HuggingFace
pub const HUGGINGFACE_API_BASE_URL: &str = "https://api-inference.huggingface.co/v1/";
pub const HUGGINGFACE_INFERENCE_URL_PREFIX: &str = "https://api-inference.huggingface.co/models";
pub const HUGGINGFACE_API_KEY_ENV: &str = "HuggingFace_API_KEY";
pub const HUGGINGFACE_API_KEY_LINK: &str = "https://huggingface.co/settings/tokens";
pub const MULTIMODAL_IMAGE_FILENAME: &str = "input.png";

// LMStudio
pub const LMSTUDIO_DEFAULT_BASE_URL: &str = "http://127.0.0.1:1234";
pub const LMSTUDIO_API_KEY_ENV: &str = "LMSTUDIO_API_KEY";
pub const LMSTUDIO_BASE_URL_ENV: &str = "LMSTUDIO_API_BASE_URL";
pub const LMSTUDIO_API_KEY_LINK: &str = "http://127.0.0.1:1234/settings/tokens";
